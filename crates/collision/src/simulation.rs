//! World containers and the per-tick pipeline.
//!
//! A world owns its body and shape lists outright — there is no
//! process-wide state, and a world's lifetime scopes everything in it.
//! One `step` runs to completion before the caller observes the world
//! again: integrate, rebuild the spatial index, test candidate pairs,
//! resolve. The caller supplies the timestep; the world owns no clock.

use std::collections::HashSet;

use glam::{Vec2, Vec3};

use crate::body::{Body2, Body3};
use crate::bounds::Aabb;
use crate::broad::{Bvh, BvhEntry, Quadtree};
use crate::narrow::{impulse_response, positional_push, NarrowPhase};
use crate::error::CollisionError;
use crate::integrator::integrate_bodies;
use crate::shape::Shape;

/// What one tick did: instrumentation plus the post-tick diff of bodies
/// whose positions or rotations changed (integration or resolution).
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// Narrow-phase tests actually run (skipped pairs do not count).
    pub narrow_tests: usize,
    /// Tests that produced a contact and were resolved.
    pub contacts: usize,
    /// Indices of bodies that moved this tick, in body-list order.
    pub moved: Vec<usize>,
}

/// Pair-candidate gate: self pairs and repeat visits are rejected here;
/// `(a, b)` and `(b, a)` count as one visit.
struct PairFilter {
    visited: HashSet<(usize, usize)>,
}

impl PairFilter {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
        }
    }

    fn admit(&mut self, a: usize, b: usize) -> bool {
        a != b && self.visited.insert((a.min(b), a.max(b)))
    }
}

/// 2D world: quadtree broad phase, positional push-apart resolution.
pub struct World2 {
    pub bodies: Vec<Body2>,
    shapes: Vec<Option<Shape<Vec2>>>,
    pub gravity: Vec2,
    /// Leaf capacity used when rebuilding the quadtree each tick.
    pub quadtree_capacity: usize,
    narrow: NarrowPhase<Vec2>,
    index: Option<Quadtree>,
}

impl World2 {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            shapes: Vec::new(),
            gravity: Vec2::new(0.0, -9.81),
            quadtree_capacity: 8,
            narrow: NarrowPhase::new(),
            index: None,
        }
    }

    /// Add a body; returns its index.
    pub fn add_body(&mut self, body: Body2) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Register a shape; returns its stable slot index. The shape's
    /// `body` index must refer to a body already in this world.
    pub fn add_shape(&mut self, shape: Shape<Vec2>) -> usize {
        assert!(
            shape.body < self.bodies.len(),
            "shape references body {} of {}",
            shape.body,
            self.bodies.len()
        );
        self.shapes.push(Some(shape));
        self.shapes.len() - 1
    }

    /// Deregister a shape. Its slot stays reserved so other slot indices
    /// remain stable; returns the shape if the slot was live.
    pub fn remove_shape(&mut self, index: usize) -> Option<Shape<Vec2>> {
        self.shapes.get_mut(index).and_then(Option::take)
    }

    pub fn shape(&self, index: usize) -> Option<&Shape<Vec2>> {
        self.shapes.get(index).and_then(Option::as_ref)
    }

    /// The quadtree built by the most recent tick, for non-physics
    /// queries (picking, selection). Payloads are shape slot indices.
    pub fn spatial_index(&self) -> Option<&Quadtree> {
        self.index.as_ref()
    }

    /// Advance the world by `dt` seconds.
    ///
    /// # Errors
    ///
    /// [`CollisionError::UnsupportedShapePair`] if a candidate pair has no
    /// registered narrow-phase test; the tick stops at the offending pair.
    pub fn step(&mut self, dt: f32) -> Result<TickReport, CollisionError> {
        let mut report = TickReport::default();
        integrate_bodies(&mut self.bodies, self.gravity, dt);

        // Snapshot of this tick's shape centers; the index is not updated
        // as resolution moves bodies.
        let mut root = Aabb::inverted();
        let mut snapshot = Vec::new();
        for (slot, shape) in self.shapes.iter().enumerate() {
            let Some(shape) = shape.as_ref() else { continue };
            let view = shape.world_view(&self.bodies[shape.body]);
            root = root.union(view.bounds);
            snapshot.push((slot, view.center));
        }
        if snapshot.is_empty() {
            self.index = None;
            report.moved = drain_moved(&mut self.bodies);
            return Ok(report);
        }

        let mut tree = Quadtree::new(root.expanded(1e-3), self.quadtree_capacity);
        for &(slot, center) in &snapshot {
            let inserted = tree.insert(center, slot);
            debug_assert!(inserted, "snapshot centers lie inside the root bounds");
        }

        let mut filter = PairFilter::new();
        for &(slot, _) in &snapshot {
            let Some(shape_a) = self.shapes[slot].as_ref() else { continue };
            // Recomputed view: corrections from earlier pairs this tick
            // are already visible.
            let view_a = shape_a.world_view(&self.bodies[shape_a.body]);
            // A point index cannot see neighbor extents, so the query
            // doubles this shape's own half extents: the larger shape of
            // any overlapping pair then covers the smaller one's center.
            let candidates = tree.query(view_a.center, view_a.bounds.half_extents() * 2.0);
            for other in candidates {
                if !filter.admit(slot, other) {
                    continue;
                }
                let Some(shape_b) = self.shapes[other].as_ref() else { continue };
                if shape_a.body == shape_b.body {
                    continue;
                }
                if self.bodies[shape_a.body].is_static && self.bodies[shape_b.body].is_static {
                    continue;
                }
                let view_a = shape_a.world_view(&self.bodies[shape_a.body]);
                let view_b = shape_b.world_view(&self.bodies[shape_b.body]);
                report.narrow_tests += 1;
                if let Some(contact) = self.narrow.detect(&view_a, &view_b)? {
                    report.contacts += 1;
                    positional_push(&mut self.bodies, view_a.body, view_b.body, &contact);
                }
            }
        }

        self.index = Some(tree);
        report.moved = drain_moved(&mut self.bodies);
        tracing::debug!(
            tests = report.narrow_tests,
            contacts = report.contacts,
            moved = report.moved.len(),
            "2d tick"
        );
        Ok(report)
    }
}

/// 3D world: BVH broad phase, positional push plus impulse resolution.
pub struct World3 {
    pub bodies: Vec<Body3>,
    shapes: Vec<Option<Shape<Vec3>>>,
    pub gravity: Vec3,
    narrow: NarrowPhase<Vec3>,
    index: Bvh,
}

impl World3 {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            shapes: Vec::new(),
            gravity: Vec3::new(0.0, -9.81, 0.0),
            narrow: NarrowPhase::new(),
            index: Bvh::default(),
        }
    }

    /// Add a body; returns its index.
    pub fn add_body(&mut self, body: Body3) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Register a shape; returns its stable slot index. The shape's
    /// `body` index must refer to a body already in this world.
    pub fn add_shape(&mut self, shape: Shape<Vec3>) -> usize {
        assert!(
            shape.body < self.bodies.len(),
            "shape references body {} of {}",
            shape.body,
            self.bodies.len()
        );
        self.shapes.push(Some(shape));
        self.shapes.len() - 1
    }

    /// Deregister a shape. Its slot stays reserved so other slot indices
    /// remain stable; returns the shape if the slot was live.
    pub fn remove_shape(&mut self, index: usize) -> Option<Shape<Vec3>> {
        self.shapes.get_mut(index).and_then(Option::take)
    }

    pub fn shape(&self, index: usize) -> Option<&Shape<Vec3>> {
        self.shapes.get(index).and_then(Option::as_ref)
    }

    /// The BVH built by the most recent tick, for non-physics queries.
    /// Payloads are shape slot indices; empty before the first tick.
    pub fn spatial_index(&self) -> &Bvh {
        &self.index
    }

    /// Advance the world by `dt` seconds.
    ///
    /// # Errors
    ///
    /// [`CollisionError::UnsupportedShapePair`] if a candidate pair has no
    /// registered narrow-phase test; the tick stops at the offending pair.
    pub fn step(&mut self, dt: f32) -> Result<TickReport, CollisionError> {
        let mut report = TickReport::default();
        integrate_bodies(&mut self.bodies, self.gravity, dt);

        let mut entries = Vec::new();
        for (slot, shape) in self.shapes.iter().enumerate() {
            let Some(shape) = shape.as_ref() else { continue };
            let view = shape.world_view(&self.bodies[shape.body]);
            entries.push(BvhEntry {
                position: view.center,
                bounds: view.bounds,
                payload: slot,
            });
        }
        let slots: Vec<usize> = entries.iter().map(|e| e.payload).collect();
        self.index = Bvh::build(entries);

        let mut filter = PairFilter::new();
        for &slot in &slots {
            let Some(shape_a) = self.shapes[slot].as_ref() else { continue };
            let view_a = shape_a.world_view(&self.bodies[shape_a.body]);
            let candidates = self.index.query(&view_a.bounds);
            for other in candidates {
                if !filter.admit(slot, other) {
                    continue;
                }
                let Some(shape_b) = self.shapes[other].as_ref() else { continue };
                if shape_a.body == shape_b.body {
                    continue;
                }
                if self.bodies[shape_a.body].is_static && self.bodies[shape_b.body].is_static {
                    continue;
                }
                let view_a = shape_a.world_view(&self.bodies[shape_a.body]);
                let view_b = shape_b.world_view(&self.bodies[shape_b.body]);
                report.narrow_tests += 1;
                if let Some(contact) = self.narrow.detect(&view_a, &view_b)? {
                    report.contacts += 1;
                    positional_push(&mut self.bodies, view_a.body, view_b.body, &contact);
                    let restitution = 0.5 * (view_a.restitution + view_b.restitution);
                    impulse_response(
                        &mut self.bodies,
                        view_a.body,
                        view_b.body,
                        &contact,
                        restitution,
                    );
                }
            }
        }

        report.moved = drain_moved(&mut self.bodies);
        tracing::debug!(
            tests = report.narrow_tests,
            contacts = report.contacts,
            moved = report.moved.len(),
            "3d tick"
        );
        Ok(report)
    }
}

/// Collect and clear the moved marks after a tick.
fn drain_moved<V, R>(bodies: &mut [crate::body::Body<V, R>]) -> Vec<usize>
where
    V: crate::math::Vector,
    R: crate::math::Rotation<V>,
{
    bodies
        .iter_mut()
        .enumerate()
        .filter_map(|(i, b)| b.take_moved().then_some(i))
        .collect()
}

impl Default for World2 {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for World3 {
    fn default() -> Self {
        Self::new()
    }
}
