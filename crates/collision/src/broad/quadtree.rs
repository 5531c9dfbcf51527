//! Region quadtree over 2D point data.

use glam::Vec2;

use crate::bounds::Aabb;

/// Point quadtree: a leaf keeps up to `capacity` entries in its own list;
/// past that it subdivides into four equal quadrants (NW, NE, SE, SW) and
/// delegates further inserts to whichever child accepts the point.
/// Points already stored in a node stay there after subdivision.
#[derive(Debug)]
pub struct Quadtree {
    bounds: Aabb<Vec2>,
    capacity: usize,
    points: Vec<(Vec2, usize)>,
    children: Option<Box<[Quadtree; 4]>>,
}

impl Quadtree {
    pub fn new(bounds: Aabb<Vec2>, capacity: usize) -> Self {
        Self {
            bounds,
            capacity: capacity.max(1),
            points: Vec::new(),
            children: None,
        }
    }

    pub fn bounds(&self) -> &Aabb<Vec2> {
        &self.bounds
    }

    /// Insert a point with a payload. Returns `false` when the point lies
    /// outside this node's bounds (for points inside the root this does
    /// not occur).
    pub fn insert(&mut self, point: Vec2, payload: usize) -> bool {
        if !self.bounds.contains_point(point) {
            return false;
        }
        if self.points.len() < self.capacity {
            self.points.push((point, payload));
            return true;
        }
        if self.children.is_none() {
            self.subdivide();
        }
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                if child.insert(point, payload) {
                    return true;
                }
            }
        }
        false
    }

    fn subdivide(&mut self) {
        let min = self.bounds.min;
        let max = self.bounds.max;
        let mid = self.bounds.center();
        let capacity = self.capacity;
        let quadrant = |min: Vec2, max: Vec2| Quadtree::new(Aabb::new(min, max), capacity);
        self.children = Some(Box::new([
            // NW, NE, SE, SW
            quadrant(Vec2::new(min.x, mid.y), Vec2::new(mid.x, max.y)),
            quadrant(mid, max),
            quadrant(Vec2::new(mid.x, min.y), Vec2::new(max.x, mid.y)),
            quadrant(min, mid),
        ]));
    }

    /// Payloads of every point inside the rectangle `center ± half_extents`.
    /// Children are visited in fixed NW, NE, SE, SW order; result order is
    /// not significant.
    pub fn query(&self, center: Vec2, half_extents: Vec2) -> Vec<usize> {
        let region = Aabb::from_center_half_extents(center, half_extents);
        let mut out = Vec::new();
        self.query_region(&region, &mut out);
        out
    }

    fn query_region(&self, region: &Aabb<Vec2>, out: &mut Vec<usize>) {
        if !self.bounds.intersects(region) {
            return;
        }
        for &(point, payload) in &self.points {
            if region.contains_point(point) {
                out.push(payload);
            }
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.query_region(region, out);
            }
        }
    }

    /// Total number of stored points, children included.
    pub fn len(&self) -> usize {
        let mut n = self.points.len();
        if let Some(children) = &self.children {
            for child in children.iter() {
                n += child.len();
            }
        }
        n
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_tree(capacity: usize) -> Quadtree {
        Quadtree::new(Aabb::new(Vec2::ZERO, Vec2::splat(100.0)), capacity)
    }

    #[test]
    fn rejects_outside_points() {
        let mut tree = unit_tree(4);
        assert!(!tree.insert(Vec2::new(-1.0, 50.0), 0));
        assert!(!tree.insert(Vec2::new(50.0, 100.5), 1));
        assert!(tree.is_empty());
    }

    #[test]
    fn boundary_points_are_accepted() {
        let mut tree = unit_tree(1);
        assert!(tree.insert(Vec2::ZERO, 0));
        assert!(tree.insert(Vec2::splat(100.0), 1));
        assert!(tree.insert(Vec2::splat(50.0), 2));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn subdivision_keeps_existing_points() {
        let mut tree = unit_tree(1);
        tree.insert(Vec2::new(10.0, 10.0), 0);
        tree.insert(Vec2::new(90.0, 90.0), 1);
        tree.insert(Vec2::new(10.0, 90.0), 2);
        let found = tree.query(Vec2::splat(50.0), Vec2::splat(50.0));
        assert_eq!(found.len(), 3);
    }
}
