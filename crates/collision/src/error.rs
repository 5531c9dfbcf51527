use thiserror::Error;

use crate::shape::ShapeKind;

/// Errors surfaced by the collision pipeline.
///
/// Per-pair geometric trouble (zero-length normals, resting contacts,
/// empty indices) resolves to documented defaults instead; the only error
/// that propagates is a configuration mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollisionError {
    /// No narrow-phase test is registered for this ordered shape pair.
    /// Fail-fast: the missing case must be registered at the call site,
    /// never ignored.
    #[error("no narrow-phase test registered for shape pair {a:?} vs {b:?}")]
    UnsupportedShapePair { a: ShapeKind, b: ShapeKind },
}
