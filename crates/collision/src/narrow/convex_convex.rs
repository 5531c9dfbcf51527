//! Convex-convex SAT over the face normals of both shapes.

use crate::math::Vector;
use crate::shape::WorldShape;

use super::sat::{interval_overlap, project, MinOverlap};
use super::Contact;

/// Candidate axes are the face normals of both shapes. Edge-pair cross
/// axes are deliberately omitted in 3D, an accepted approximation for
/// box/simple-convex pairings. Any separating axis exits early; otherwise
/// the minimum-overlap axis, oriented from A's center toward B's, becomes
/// the contact normal.
pub fn detect_convex_convex<V: Vector>(
    a: &WorldShape<V>,
    b: &WorldShape<V>,
) -> Option<Contact<V>> {
    let mut tracker = MinOverlap::new();
    for &axis in a.normals.iter().chain(b.normals.iter()) {
        if axis.length_squared() < 1e-12 {
            continue;
        }
        let overlap = interval_overlap(project(&a.vertices, axis), project(&b.vertices, axis));
        if !tracker.accumulate(axis, overlap) {
            return None;
        }
    }
    if !tracker.depth.is_finite() {
        return None;
    }
    Some(Contact {
        normal: tracker.oriented_axis(b.center - a.center),
        depth: tracker.depth,
    })
}
