//! Vector-algebra capability traits over [`glam`] types.
//!
//! The pipeline is dimension-generic: every algorithm that does not depend
//! on axis-candidate generation is written once against [`Vector`] and
//! [`Rotation`] and instantiated for 2D (`Vec2` + angle) and 3D
//! (`Vec3` + quaternion). The arithmetic itself stays in `glam`.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use glam::{Quat, Vec2, Vec3};

/// Minimal vector capabilities the collision core needs: dot products,
/// lengths, componentwise min/max, and per-axis access.
pub trait Vector:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f32, Output = Self>
{
    /// Number of components (2 or 3).
    const DIM: usize;
    /// Additive identity.
    const ZERO: Self;

    /// Vector with every component set to `value`.
    fn splat(value: f32) -> Self;
    /// Unit vector along `axis` (0 = x, 1 = y, 2 = z).
    fn unit_axis(axis: usize) -> Self;
    /// Component along `axis`.
    fn component(self, axis: usize) -> f32;
    fn dot(self, rhs: Self) -> f32;
    fn length(self) -> f32;
    fn length_squared(self) -> f32;
    /// Normalized vector, or zero when the input length is zero.
    fn normalize_or_zero(self) -> Self;
    /// Componentwise minimum.
    fn min(self, rhs: Self) -> Self;
    /// Componentwise maximum.
    fn max(self, rhs: Self) -> Self;
}

impl Vector for Vec2 {
    const DIM: usize = 2;
    const ZERO: Self = Vec2::ZERO;

    fn splat(value: f32) -> Self {
        Vec2::splat(value)
    }

    fn unit_axis(axis: usize) -> Self {
        match axis {
            0 => Vec2::X,
            _ => Vec2::Y,
        }
    }

    fn component(self, axis: usize) -> f32 {
        self[axis]
    }

    fn dot(self, rhs: Self) -> f32 {
        Vec2::dot(self, rhs)
    }

    fn length(self) -> f32 {
        Vec2::length(self)
    }

    fn length_squared(self) -> f32 {
        Vec2::length_squared(self)
    }

    fn normalize_or_zero(self) -> Self {
        Vec2::normalize_or_zero(self)
    }

    fn min(self, rhs: Self) -> Self {
        Vec2::min(self, rhs)
    }

    fn max(self, rhs: Self) -> Self {
        Vec2::max(self, rhs)
    }
}

impl Vector for Vec3 {
    const DIM: usize = 3;
    const ZERO: Self = Vec3::ZERO;

    fn splat(value: f32) -> Self {
        Vec3::splat(value)
    }

    fn unit_axis(axis: usize) -> Self {
        match axis {
            0 => Vec3::X,
            1 => Vec3::Y,
            _ => Vec3::Z,
        }
    }

    fn component(self, axis: usize) -> f32 {
        self[axis]
    }

    fn dot(self, rhs: Self) -> f32 {
        Vec3::dot(self, rhs)
    }

    fn length(self) -> f32 {
        Vec3::length(self)
    }

    fn length_squared(self) -> f32 {
        Vec3::length_squared(self)
    }

    fn normalize_or_zero(self) -> Self {
        Vec3::normalize_or_zero(self)
    }

    fn min(self, rhs: Self) -> Self {
        Vec3::min(self, rhs)
    }

    fn max(self, rhs: Self) -> Self {
        Vec3::max(self, rhs)
    }
}

/// Orientation state for a body: a plain angle in 2D, a quaternion in 3D.
pub trait Rotation<V: Vector>: Copy + Debug {
    /// Angular velocity representation (`f32` in 2D, `Vec3` in 3D).
    type Angular: Copy + Debug + Default + PartialEq;

    const IDENTITY: Self;

    /// Apply this rotation to a vector.
    fn rotate(self, v: V) -> V;
    /// Rotation advanced by `velocity * dt`.
    fn integrated(self, velocity: Self::Angular, dt: f32) -> Self;
    /// True when the angular velocity is exactly zero (integration skip).
    fn is_zero_angular(velocity: Self::Angular) -> bool;
}

impl Rotation<Vec2> for f32 {
    type Angular = f32;

    const IDENTITY: Self = 0.0;

    fn rotate(self, v: Vec2) -> Vec2 {
        Vec2::from_angle(self).rotate(v)
    }

    fn integrated(self, velocity: f32, dt: f32) -> Self {
        self + velocity * dt
    }

    fn is_zero_angular(velocity: f32) -> bool {
        velocity == 0.0
    }
}

impl Rotation<Vec3> for Quat {
    type Angular = Vec3;

    const IDENTITY: Self = Quat::IDENTITY;

    fn rotate(self, v: Vec3) -> Vec3 {
        self * v
    }

    fn integrated(self, velocity: Vec3, dt: f32) -> Self {
        // dq/dt = 0.5 * (w, 0) * q, renormalized to stay a unit rotation.
        let spin = Quat::from_xyzw(velocity.x, velocity.y, velocity.z, 0.0);
        (self + spin * self * (0.5 * dt)).normalize()
    }

    fn is_zero_angular(velocity: Vec3) -> bool {
        velocity == Vec3::ZERO
    }
}
