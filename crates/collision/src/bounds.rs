//! Axis-aligned bounding volumes (rectangles in 2D, boxes in 3D).

use crate::math::Vector;

/// Axis-aligned box spanning `min..=max` componentwise.
///
/// Once constructed from real geometry `min <= max` holds on every axis.
/// [`Aabb::inverted`] is the one deliberate exception: it is the identity
/// element for incremental union, so folding `include_point` over any
/// non-empty point set yields that set's tight bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<V: Vector> {
    pub min: V,
    pub max: V,
}

impl<V: Vector> Aabb<V> {
    pub fn new(min: V, max: V) -> Self {
        Self { min, max }
    }

    /// Union identity: `min = +inf`, `max = -inf`. Any point included into
    /// it becomes the bounds; intersects nothing.
    pub fn inverted() -> Self {
        Self {
            min: V::splat(f32::INFINITY),
            max: V::splat(f32::NEG_INFINITY),
        }
    }

    pub fn from_center_half_extents(center: V, half_extents: V) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Grow to cover `point`. The only in-place mutation bounds support;
    /// queries never modify the box.
    pub fn include_point(&mut self, point: V) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Smallest box covering both operands.
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Inclusive overlap test on every axis.
    pub fn intersects(&self, other: &Self) -> bool {
        for axis in 0..V::DIM {
            if self.min.component(axis) > other.max.component(axis)
                || self.max.component(axis) < other.min.component(axis)
            {
                return false;
            }
        }
        true
    }

    /// Inclusive containment test.
    pub fn contains_point(&self, point: V) -> bool {
        for axis in 0..V::DIM {
            let p = point.component(axis);
            if p < self.min.component(axis) || p > self.max.component(axis) {
                return false;
            }
        }
        true
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Self) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    pub fn center(self) -> V {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(self) -> V {
        (self.max - self.min) * 0.5
    }

    /// Index of the axis with the largest extent (split axis selection).
    pub fn largest_axis(&self) -> usize {
        let extent = self.max - self.min;
        let mut best = 0;
        for axis in 1..V::DIM {
            if extent.component(axis) > extent.component(best) {
                best = axis;
            }
        }
        best
    }

    /// Grow symmetrically by `margin` on every axis.
    pub fn expanded(self, margin: f32) -> Self {
        Self {
            min: self.min - V::splat(margin),
            max: self.max + V::splat(margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    #[test]
    fn inverted_is_union_identity() {
        let mut b = Aabb::<Vec2>::inverted();
        b.include_point(Vec2::new(1.0, -2.0));
        b.include_point(Vec2::new(-3.0, 4.0));
        assert_eq!(b.min, Vec2::new(-3.0, -2.0));
        assert_eq!(b.max, Vec2::new(1.0, 4.0));
    }

    #[test]
    fn inverted_intersects_nothing() {
        let empty = Aabb::<Vec3>::inverted();
        let unit = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert!(!empty.intersects(&unit));
    }

    #[test]
    fn touching_boxes_intersect() {
        let a = Aabb::new(Vec2::ZERO, Vec2::ONE);
        let b = Aabb::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn largest_axis_picks_widest_extent() {
        let b = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 5.0, 2.0));
        assert_eq!(b.largest_axis(), 1);
    }
}
