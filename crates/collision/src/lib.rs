#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]
//! # Rigid-Body Collision Pipeline
//!
//! A discrete, tick-based collision pipeline for 2D and 3D simulated
//! worlds: integrate body motion, prune the pair space with a spatial
//! index, measure overlap with separating-axis tests, and push or bounce
//! overlapping bodies apart.
//!
//! ## Key Components
//!
//! -   **Worlds:** [`World2`] and [`World3`] own the bodies and shapes of
//!     one simulation and run the whole pipeline in [`World2::step`] /
//!     [`World3::step`]. An external scheduler calls `step` once per
//!     simulation step with its own Δt; the pipeline owns no clock.
//! -   **Broad phase:** a median-split [`Bvh`] over 3D bounds and a
//!     region [`Quadtree`] over 2D points, both rebuilt from each tick's
//!     snapshot and queryable between ticks.
//! -   **Narrow phase:** [`NarrowPhase`] dispatches a shape pair to its
//!     separating-axis or distance test and produces a [`Contact`]
//!     (normal oriented from the first shape toward the second, plus
//!     penetration depth).
//! -   **Resolution:** [`positional_push`] splits the penetration between
//!     the bodies by relative speed (mass at rest); the 3D world follows
//!     with the linear [`impulse_response`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use collision::{Body3, Shape, World3};
//! use glam::Vec3;
//!
//! let mut world = World3::new();
//! let floor = world.add_body(Body3::new_static(Vec3::ZERO));
//! world.add_shape(Shape::cuboid(Vec3::new(50.0, 1.0, 50.0), floor));
//! let ball = world.add_body(Body3::new(Vec3::new(0.0, 10.0, 0.0)));
//! world.add_shape(Shape::circle(1.0, ball).with_restitution(0.4));
//!
//! let dt = 0.01;
//! for _ in 0..100 {
//!     let report = world.step(dt)?;
//! }
//! ```

pub mod body;
pub mod bounds;
pub mod broad;
pub mod error;
pub mod integrator;
pub mod math;
pub mod narrow;
pub mod shape;
pub mod simulation;

pub use body::{Body, Body2, Body3, ForceMode, MIN_MASS};
pub use bounds::Aabb;
pub use broad::{Bvh, BvhEntry, BvhNode, BvhStats, Quadtree};
pub use error::CollisionError;
pub use integrator::integrate_bodies;
pub use math::{Rotation, Vector};
pub use narrow::{impulse_response, positional_push, Contact, DetectorFn, NarrowPhase};
pub use shape::{Shape, ShapeData, ShapeKind, WorldShape};
pub use simulation::{TickReport, World2, World3};
