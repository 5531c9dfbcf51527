//! Circle-circle (sphere-sphere) test: purely distance-based, no axis loop.

use crate::math::Vector;
use crate::shape::WorldShape;

use super::Contact;

/// Centers closer than this are treated as coincident.
const COINCIDENT_EPSILON: f32 = 1e-4;

/// `depth = (rA + rB) - |cB - cA|`; hit iff `depth > 0`. The normal points
/// from A's center toward B's center; coincident centers fall back to the
/// x axis so the pair still separates instead of producing a NaN.
pub fn detect_circle_circle<V: Vector>(
    a: &WorldShape<V>,
    b: &WorldShape<V>,
) -> Option<Contact<V>> {
    let delta = b.center - a.center;
    let distance = delta.length();
    let depth = (a.radius + b.radius) - distance;
    if depth <= 0.0 {
        return None;
    }
    let normal = if distance > COINCIDENT_EPSILON {
        delta * (1.0 / distance)
    } else {
        V::unit_axis(0)
    };
    Some(Contact { normal, depth })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;
    use crate::bounds::Aabb;
    use glam::Vec2;

    fn circle(x: f32, y: f32, radius: f32) -> WorldShape<Vec2> {
        let center = Vec2::new(x, y);
        WorldShape {
            kind: ShapeKind::Circle,
            body: 0,
            center,
            radius,
            vertices: Vec::new(),
            normals: Vec::new(),
            bounds: Aabb::from_center_half_extents(center, Vec2::splat(radius)),
            restitution: 0.0,
        }
    }

    #[test]
    fn overlapping_circles_hit() {
        let contact = detect_circle_circle(&circle(0.0, 0.0, 2.0), &circle(3.0, 0.0, 2.0))
            .expect("radii 2+2 at distance 3 overlap");
        assert!((contact.depth - 1.0).abs() < 1e-6);
        assert!((contact.normal - Vec2::X).length() < 1e-6);
    }

    #[test]
    fn separated_circles_miss() {
        assert!(detect_circle_circle(&circle(0.0, 0.0, 2.0), &circle(5.0, 0.0, 2.0)).is_none());
    }

    #[test]
    fn coincident_centers_use_fallback_axis() {
        let contact = detect_circle_circle(&circle(1.0, 1.0, 1.0), &circle(1.0, 1.0, 1.0))
            .expect("fully overlapping");
        assert_eq!(contact.normal, Vec2::X);
        assert!((contact.depth - 2.0).abs() < 1e-6);
    }
}
