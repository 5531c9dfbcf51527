//! Convex-circle (polygon/box vs circle or sphere) test.

use crate::math::Vector;
use crate::shape::WorldShape;

use super::sat::{interval_overlap, project, MinOverlap};
use super::Contact;

/// Distances below this are degenerate; the refinement backs off to the
/// axis-loop result instead of dividing by them.
const DEGENERATE_EPSILON: f32 = 1e-6;

/// SAT with the convex shape's face normals plus one extra axis toward the
/// convex vertex nearest the circle center — the axis face normals miss on
/// corner contacts. Every axis is normalized before the circle projects as
/// `center . axis +/- radius`.
///
/// In 2D, when the circle center lies outside the polygon, depth and
/// normal are recomputed from the closest point on the polygon boundary,
/// which handles near-grazing corner contacts exactly instead of
/// overshooting along a face normal.
pub fn detect_convex_circle<V: Vector>(
    convex: &WorldShape<V>,
    circle: &WorldShape<V>,
) -> Option<Contact<V>> {
    let mut tracker = MinOverlap::new();
    let corner_axis = nearest_vertex_axis(convex, circle.center);
    for axis in convex
        .normals
        .iter()
        .copied()
        .chain(corner_axis)
        .map(Vector::normalize_or_zero)
    {
        if axis.length_squared() < 1e-12 {
            continue;
        }
        let c = circle.center.dot(axis);
        let overlap = interval_overlap(
            project(&convex.vertices, axis),
            (c - circle.radius, c + circle.radius),
        );
        if !tracker.accumulate(axis, overlap) {
            return None;
        }
    }
    if !tracker.depth.is_finite() {
        return None;
    }

    if let Some(refined) = refine_outside_contact(convex, circle) {
        return refined;
    }

    Some(Contact {
        normal: tracker.oriented_axis(circle.center - convex.center),
        depth: tracker.depth,
    })
}

/// Axis from the circle center toward the closest convex vertex, or `None`
/// when the center coincides with that vertex.
fn nearest_vertex_axis<V: Vector>(convex: &WorldShape<V>, center: V) -> Option<V> {
    let nearest = convex
        .vertices
        .iter()
        .copied()
        .min_by(|&a, &b| {
            let da = (a - center).length_squared();
            let db = (b - center).length_squared();
            da.total_cmp(&db)
        })?;
    let axis = nearest - center;
    (axis.length_squared() > 1e-12).then_some(axis)
}

/// 2D closest-point pass for circle centers outside the polygon.
///
/// Returns `None` to keep the axis-loop result (center inside, degenerate
/// geometry, or not 2D), `Some(None)` when the exact distance shows the
/// shapes separated, `Some(contact)` otherwise.
fn refine_outside_contact<V: Vector>(
    convex: &WorldShape<V>,
    circle: &WorldShape<V>,
) -> Option<Option<Contact<V>>> {
    if V::DIM != 2 || convex.vertices.len() < 3 {
        return None;
    }
    let center = circle.center;

    // Counter-clockwise winding: inside iff every edge cross is >= 0.
    let cross = |edge: V, to_center: V| {
        edge.component(0) * to_center.component(1) - edge.component(1) * to_center.component(0)
    };
    let mut inside = true;
    let mut closest: Option<(f32, V)> = None;
    let wrapped = convex.vertices.iter().cycle().skip(1);
    for (&v0, &v1) in convex.vertices.iter().zip(wrapped) {
        let edge = v1 - v0;
        if cross(edge, center - v0) < 0.0 {
            inside = false;
        }
        let edge_len_sq = edge.length_squared();
        if edge_len_sq < DEGENERATE_EPSILON {
            continue;
        }
        let t = ((center - v0).dot(edge) / edge_len_sq).clamp(0.0, 1.0);
        let point = v0 + edge * t;
        let dist_sq = (center - point).length_squared();
        if closest.is_none_or(|(best, _)| dist_sq < best) {
            closest = Some((dist_sq, point));
        }
    }
    if inside {
        return None;
    }
    let (dist_sq, point) = closest?;
    let distance = dist_sq.sqrt();
    if distance >= circle.radius {
        return Some(None);
    }
    if distance < DEGENERATE_EPSILON {
        // Center sits on the boundary; the axis loop already has a usable
        // answer, skip rather than divide by ~zero.
        return None;
    }
    Some(Some(Contact {
        normal: (center - point) * (1.0 / distance),
        depth: circle.radius - distance,
    }))
}
