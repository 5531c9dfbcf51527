//! Resolution policies: positional push-apart and impulse velocity
//! response.

use crate::body::Body;
use crate::math::{Rotation, Vector};

use super::Contact;

/// Split a contact's depth between two bodies and push them apart along
/// the contact normal. The faster body takes the larger share of the
/// correction (`|vA| / (|vA| + |vB|)`); at rest the split falls back to
/// inverse-mass weighting, so a dynamic body yields fully to a static one
/// and two equal resting masses split 50/50. Static bodies never move.
///
/// `contact.normal` must point from body `a` toward body `b`.
pub fn positional_push<V: Vector, R: Rotation<V>>(
    bodies: &mut [Body<V, R>],
    a: usize,
    b: usize,
    contact: &Contact<V>,
) {
    let (body_a, body_b) = pair_mut(bodies, a, b);
    if body_a.is_static && body_b.is_static {
        return;
    }

    let speed_a = body_a.velocity.length();
    let speed_b = body_b.velocity.length();
    let combined = speed_a + speed_b;
    let share_a = if combined > 0.0 {
        speed_a / combined
    } else {
        let inv_a = if body_a.is_static { 0.0 } else { body_a.inverse_mass() };
        let inv_b = if body_b.is_static { 0.0 } else { body_b.inverse_mass() };
        inv_a / (inv_a + inv_b)
    };

    if !body_a.is_static {
        let pushed = body_a.position() - contact.normal * (share_a * contact.depth);
        body_a.set_position(pushed);
    }
    if !body_b.is_static {
        let pushed = body_b.position() + contact.normal * ((1.0 - share_a) * contact.depth);
        body_b.set_position(pushed);
    }
}

/// Impulse-based velocity response along the contact normal.
///
/// Linear velocity only; no rotational response. `restitution` is the
/// pair's combined coefficient (0 = inelastic, 1 = elastic). Resting or
/// separating pairs (`dot(n, vA - vB) <= 0`) are a no-op, as are
/// static-static pairs; static bodies never receive a velocity change.
pub fn impulse_response<V: Vector, R: Rotation<V>>(
    bodies: &mut [Body<V, R>],
    a: usize,
    b: usize,
    contact: &Contact<V>,
    restitution: f32,
) {
    let (body_a, body_b) = pair_mut(bodies, a, b);
    if body_a.is_static && body_b.is_static {
        return;
    }

    let approach = contact.normal.dot(body_a.velocity - body_b.velocity);
    if approach <= 0.0 {
        return;
    }

    let effective_mass = if body_a.is_static {
        body_b.mass()
    } else if body_b.is_static {
        body_a.mass()
    } else {
        1.0 / (body_a.inverse_mass() + body_b.inverse_mass())
    };
    let impulse = (1.0 + restitution) * effective_mass * approach;

    if !body_a.is_static {
        body_a.velocity = body_a.velocity - contact.normal * (impulse * body_a.inverse_mass());
    }
    if !body_b.is_static {
        body_b.velocity = body_b.velocity + contact.normal * (impulse * body_b.inverse_mass());
    }
}

/// Mutable references to two distinct bodies of one slice.
fn pair_mut<V: Vector, R: Rotation<V>>(
    bodies: &mut [Body<V, R>],
    a: usize,
    b: usize,
) -> (&mut Body<V, R>, &mut Body<V, R>) {
    assert_ne!(a, b, "a pair must reference two distinct bodies");
    if a < b {
        let (head, tail) = bodies.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Body2;
    use glam::Vec2;

    fn contact_x(depth: f32) -> Contact<Vec2> {
        Contact {
            normal: Vec2::X,
            depth,
        }
    }

    #[test]
    fn resting_pair_splits_by_inverse_mass() {
        let mut bodies = vec![Body2::new(Vec2::ZERO), Body2::new(Vec2::new(0.5, 0.0))];
        positional_push(&mut bodies, 0, 1, &contact_x(0.5));
        assert!((bodies[0].position().x + 0.25).abs() < 1e-6);
        assert!((bodies[1].position().x - 0.75).abs() < 1e-6);
    }

    #[test]
    fn dynamic_yields_fully_to_static() {
        let mut bodies = vec![
            Body2::new_static(Vec2::ZERO),
            Body2::new(Vec2::new(0.5, 0.0)),
        ];
        positional_push(&mut bodies, 0, 1, &contact_x(0.5));
        assert_eq!(bodies[0].position(), Vec2::ZERO, "static body never moves");
        assert!((bodies[1].position().x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn faster_body_takes_the_larger_share() {
        let mut bodies = vec![Body2::new(Vec2::ZERO), Body2::new(Vec2::new(0.5, 0.0))];
        bodies[0].velocity = Vec2::new(3.0, 0.0);
        bodies[1].velocity = Vec2::new(-1.0, 0.0);
        positional_push(&mut bodies, 0, 1, &contact_x(0.4));
        assert!((bodies[0].position().x + 0.3).abs() < 1e-6);
        assert!((bodies[1].position().x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn separating_pair_gets_no_impulse() {
        let mut bodies = vec![Body2::new(Vec2::ZERO), Body2::new(Vec2::new(1.0, 0.0))];
        bodies[0].velocity = Vec2::new(-1.0, 0.0);
        bodies[1].velocity = Vec2::new(1.0, 0.0);
        impulse_response(&mut bodies, 0, 1, &contact_x(0.1), 0.5);
        assert_eq!(bodies[0].velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(bodies[1].velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn elastic_head_on_swap() {
        let mut bodies = vec![Body2::new(Vec2::ZERO), Body2::new(Vec2::new(1.0, 0.0))];
        bodies[0].velocity = Vec2::new(1.0, 0.0);
        bodies[1].velocity = Vec2::new(-1.0, 0.0);
        impulse_response(&mut bodies, 0, 1, &contact_x(0.1), 1.0);
        assert!((bodies[0].velocity.x + 1.0).abs() < 1e-6);
        assert!((bodies[1].velocity.x - 1.0).abs() < 1e-6);
    }
}
