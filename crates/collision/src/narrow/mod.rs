//! Narrow-phase collision detection and contact resolution.
//!
//! [`NarrowPhase`] routes a shape pair to the matching detector. Detectors
//! return `Option<Contact>`; a missing registration is a configuration
//! error and fails fast through [`CollisionError::UnsupportedShapePair`].

mod circle_circle;
mod convex_circle;
mod convex_convex;
pub mod response;
pub mod sat;

pub use circle_circle::detect_circle_circle;
pub use convex_circle::detect_convex_circle;
pub use convex_convex::detect_convex_convex;
pub use response::{impulse_response, positional_push};

use std::collections::HashMap;

use crate::error::CollisionError;
use crate::math::Vector;
use crate::shape::{ShapeKind, WorldShape};

/// Contact between two shapes. Ephemeral: produced by one pair test,
/// consumed by the resolution policy, never stored.
///
/// `normal` is unit length and always points from the first shape of the
/// test (A) toward the second (B); `depth` is the distance along the
/// normal needed to separate the pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact<V: Vector> {
    pub normal: V,
    pub depth: f32,
}

impl<V: Vector> Contact<V> {
    /// The same contact seen from the other shape's side.
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            depth: self.depth,
        }
    }
}

/// Detector signature: world views in, contact out (`None` = no hit).
pub type DetectorFn<V> = fn(&WorldShape<V>, &WorldShape<V>) -> Option<Contact<V>>;

/// Narrow-phase dispatcher: a registry of detector functions keyed by the
/// ordered shape-kind pair.
pub struct NarrowPhase<V: Vector> {
    detectors: HashMap<(ShapeKind, ShapeKind), DetectorFn<V>>,
}

impl<V: Vector> NarrowPhase<V> {
    /// Registry with every supported pair wired up.
    pub fn new() -> Self {
        use ShapeKind::{Box, Circle, Convex};
        let mut narrow = Self::empty();
        narrow.register(Circle, Circle, detect_circle_circle);
        // Boxes carry derived world vertices and face normals, so every
        // box pairing reduces to the generic convex test.
        narrow.register(Convex, Convex, detect_convex_convex);
        narrow.register(Convex, Box, detect_convex_convex);
        narrow.register(Box, Convex, detect_convex_convex);
        narrow.register(Box, Box, detect_convex_convex);
        narrow.register(Convex, Circle, detect_convex_circle);
        narrow.register(Box, Circle, detect_convex_circle);
        narrow.register(Circle, Convex, detect_circle_convex);
        narrow.register(Circle, Box, detect_circle_convex);
        narrow
    }

    /// Registry with no detectors; every test fails until pairs are
    /// registered.
    pub fn empty() -> Self {
        Self {
            detectors: HashMap::new(),
        }
    }

    /// Register a detector for one ordered kind pair.
    pub fn register(&mut self, a: ShapeKind, b: ShapeKind, detector: DetectorFn<V>) {
        self.detectors.insert((a, b), detector);
    }

    /// Run the narrow-phase test for a pair of world views.
    ///
    /// # Errors
    ///
    /// [`CollisionError::UnsupportedShapePair`] when no detector is
    /// registered for `(a.kind, b.kind)`.
    pub fn detect(
        &self,
        a: &WorldShape<V>,
        b: &WorldShape<V>,
    ) -> Result<Option<Contact<V>>, CollisionError> {
        match self.detectors.get(&(a.kind, b.kind)) {
            Some(detector) => Ok(detector(a, b)),
            None => Err(CollisionError::UnsupportedShapePair {
                a: a.kind,
                b: b.kind,
            }),
        }
    }
}

impl<V: Vector> Default for NarrowPhase<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Flipped ordering: run the convex/circle detector with the convex shape
/// first, then reorient the normal to the caller's A-to-B convention.
fn detect_circle_convex<V: Vector>(a: &WorldShape<V>, b: &WorldShape<V>) -> Option<Contact<V>> {
    detect_convex_circle(b, a).map(Contact::flipped)
}
