//! Broad-phase spatial indices.
//!
//! Both variants index a single tick's snapshot and are rebuilt from
//! scratch every tick rather than incrementally refit: [`bvh::Bvh`] for 3D
//! bounds data, [`quadtree::Quadtree`] for 2D point data. Queries return a
//! conservative superset of the matching payloads — false positives are
//! fine, false negatives are not.

pub mod bvh;
pub mod quadtree;

pub use bvh::{Bvh, BvhEntry, BvhNode, BvhStats};
pub use quadtree::Quadtree;
