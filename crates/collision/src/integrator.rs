//! Velocity and transform integration, shared by both worlds.

use crate::body::Body;
use crate::math::{Rotation, Vector};

/// Advance every non-static body by one step: gravity (when enabled),
/// accumulated forces, drag decay, then position and rotation.
///
/// The position update is skipped when the velocity is exactly zero and
/// the rotation update when the angular velocity is exactly zero — an
/// optimization for resting bodies, not a correctness requirement.
pub fn integrate_bodies<V: Vector, R: Rotation<V>>(
    bodies: &mut [Body<V, R>],
    gravity: V,
    dt: f32,
) {
    for body in bodies {
        if body.is_static {
            // Static bodies keep no momentum; drop anything accumulated.
            let _ = body.take_force();
            continue;
        }
        if body.use_gravity {
            body.velocity = body.velocity + gravity * dt;
        }
        let force = body.take_force();
        if force != V::ZERO {
            body.velocity = body.velocity + force * (dt * body.inverse_mass());
        }
        if body.drag > 0.0 {
            body.velocity = body.velocity * (1.0 / (1.0 + body.drag * dt));
        }
        if body.velocity != V::ZERO {
            let position = body.position() + body.velocity * dt;
            body.set_position(position);
        }
        if !R::is_zero_angular(body.angular_velocity) {
            let rotation = body.rotation().integrated(body.angular_velocity, dt);
            body.set_rotation(rotation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Body2, Body3, ForceMode};
    use glam::{Vec2, Vec3};

    #[test]
    fn gravity_accelerates_then_moves() {
        let mut bodies = vec![Body3::new(Vec3::new(0.0, 10.0, 0.0))];
        integrate_bodies(&mut bodies, Vec3::new(0.0, -10.0, 0.0), 0.1);
        assert!((bodies[0].velocity.y + 1.0).abs() < 1e-6);
        assert!((bodies[0].position().y - 9.9).abs() < 1e-5);
    }

    #[test]
    fn static_bodies_do_not_move() {
        let mut bodies = vec![Body2::new_static(Vec2::ZERO)];
        integrate_bodies(&mut bodies, Vec2::new(0.0, -10.0), 1.0);
        assert_eq!(bodies[0].position(), Vec2::ZERO);
        assert_eq!(bodies[0].velocity, Vec2::ZERO);
    }

    #[test]
    fn force_mode_scales_by_mass_and_time() {
        let mut bodies = vec![Body2::new(Vec2::ZERO)];
        bodies[0].use_gravity = false;
        bodies[0].set_mass(2.0);
        bodies[0].add_force(Vec2::new(8.0, 0.0), ForceMode::Force);
        integrate_bodies(&mut bodies, Vec2::ZERO, 0.5);
        // dv = F * dt / m = 8 * 0.5 / 2.
        assert!((bodies[0].velocity.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn drag_decays_velocity() {
        let mut bodies = vec![Body2::new(Vec2::ZERO)];
        bodies[0].use_gravity = false;
        bodies[0].drag = 1.0;
        bodies[0].velocity = Vec2::new(2.0, 0.0);
        integrate_bodies(&mut bodies, Vec2::ZERO, 1.0);
        assert!((bodies[0].velocity.x - 1.0).abs() < 1e-6);
    }
}
