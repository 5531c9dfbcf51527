//! Rigid-body state: position, orientation, velocities, mass and flags.

use glam::{Quat, Vec2, Vec3};

use crate::math::{Rotation, Vector};

/// Smallest mass a body can carry. Every constructor and setter clamps to
/// this floor so `1.0 / mass` stays finite.
pub const MIN_MASS: f32 = 1e-20;

/// How [`Body::add_force`] interprets its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceMode {
    /// Accumulated as a force: scaled by `dt / mass` at the next
    /// integration step.
    Force,
    /// Applied to the velocity immediately, unscaled.
    VelocityChange,
}

/// A rigid body. Generic over the vector type and rotation representation;
/// use [`Body2`] and [`Body3`] in application code.
///
/// Position and rotation go through setters that mark the body as moved;
/// the world tick drains those marks into the tick report's `moved` list.
/// The `_silent` variants are for bulk updates that must not show up in
/// the diff.
#[derive(Debug, Clone)]
pub struct Body<V: Vector, R: Rotation<V>> {
    position: V,
    rotation: R,
    moved: bool,
    pub velocity: V,
    pub angular_velocity: R::Angular,
    mass: f32,
    pub is_static: bool,
    pub use_gravity: bool,
    /// Linear damping coefficient; `0.0` disables drag.
    pub drag: f32,
    force_accum: V,
}

/// 2D body: angle rotation, scalar angular velocity.
pub type Body2 = Body<Vec2, f32>;
/// 3D body: quaternion rotation, vector angular velocity.
pub type Body3 = Body<Vec3, Quat>;

impl<V: Vector, R: Rotation<V>> Body<V, R> {
    /// Dynamic body at `position`, unit mass, gravity-affected, no drag.
    pub fn new(position: V) -> Self {
        Self {
            position,
            rotation: R::IDENTITY,
            moved: false,
            velocity: V::ZERO,
            angular_velocity: Default::default(),
            mass: 1.0,
            is_static: false,
            use_gravity: true,
            drag: 0.0,
            force_accum: V::ZERO,
        }
    }

    /// Static body at `position`: never integrated, never pushed.
    pub fn new_static(position: V) -> Self {
        Self {
            is_static: true,
            use_gravity: false,
            ..Self::new(position)
        }
    }

    pub fn position(&self) -> V {
        self.position
    }

    /// Move the body and mark it as moved. Returns whether the position
    /// actually changed.
    pub fn set_position(&mut self, position: V) -> bool {
        let changed = position != self.position;
        self.position = position;
        if changed {
            self.moved = true;
        }
        changed
    }

    /// Move the body without marking it (bulk/internal updates).
    pub fn set_position_silent(&mut self, position: V) {
        self.position = position;
    }

    pub fn rotation(&self) -> R {
        self.rotation
    }

    /// Rotate the body and mark it as moved.
    pub fn set_rotation(&mut self, rotation: R) {
        self.rotation = rotation;
        self.moved = true;
    }

    pub fn set_rotation_silent(&mut self, rotation: R) {
        self.rotation = rotation;
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Set the mass, floor-clamped to [`MIN_MASS`].
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass.max(MIN_MASS);
    }

    pub fn inverse_mass(&self) -> f32 {
        1.0 / self.mass
    }

    /// Apply an external force or velocity change. Static bodies ignore
    /// both modes. This is the only external velocity mutator besides
    /// gravity and collision resolution.
    pub fn add_force(&mut self, amount: V, mode: ForceMode) {
        if self.is_static {
            return;
        }
        match mode {
            ForceMode::Force => self.force_accum = self.force_accum + amount,
            ForceMode::VelocityChange => self.velocity = self.velocity + amount,
        }
    }

    /// Read and clear the moved mark.
    pub fn take_moved(&mut self) -> bool {
        std::mem::replace(&mut self.moved, false)
    }

    /// Drain the force accumulator (consumed once per integration step).
    pub(crate) fn take_force(&mut self) -> V {
        std::mem::replace(&mut self.force_accum, V::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_never_reaches_zero() {
        let mut body = Body2::new(Vec2::ZERO);
        body.set_mass(0.0);
        assert!(body.mass() >= MIN_MASS);
        body.set_mass(-5.0);
        assert!(body.mass() >= MIN_MASS);
        assert!(body.inverse_mass().is_finite());
    }

    #[test]
    fn silent_setter_does_not_mark() {
        let mut body = Body3::new(Vec3::ZERO);
        body.set_position_silent(Vec3::ONE);
        assert!(!body.take_moved());
        body.set_position(Vec3::ZERO);
        assert!(body.take_moved());
        assert!(!body.take_moved(), "mark must clear on read");
    }

    #[test]
    fn static_body_ignores_forces() {
        let mut body = Body2::new_static(Vec2::ZERO);
        body.add_force(Vec2::new(10.0, 0.0), ForceMode::VelocityChange);
        assert_eq!(body.velocity, Vec2::ZERO);
    }
}
