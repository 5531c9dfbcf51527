//! Public-API smoke test: build both worlds the way an application would
//! and make sure the surface holds together.

use collision::{Body2, Body3, ForceMode, Shape, World2, World3};
use glam::{Quat, Vec2, Vec3};

#[test]
fn build_and_run_a_small_2d_scene() -> anyhow::Result<()> {
    let mut world = World2::new();

    let ground = world.add_body(Body2::new_static(Vec2::new(0.0, -2.0)));
    world.add_shape(Shape::cuboid(Vec2::new(20.0, 1.0), ground));

    let polygon_body = world.add_body(Body2::new(Vec2::new(0.0, 4.0)));
    world.add_shape(Shape::convex_polygon(
        vec![
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.2, 0.5),
            Vec2::new(0.0, 1.4),
            Vec2::new(-1.2, 0.5),
        ],
        polygon_body,
    ));

    let ball = world.add_body(Body2::new(Vec2::new(0.3, 8.0)));
    world.add_shape(Shape::circle(0.5, ball).with_scale(2.0));
    world.bodies[ball].add_force(Vec2::new(0.4, 0.0), ForceMode::VelocityChange);

    for _ in 0..240 {
        world.step(1.0 / 60.0)?;
    }

    for body in &world.bodies {
        assert!(
            body.position().y > -10.0,
            "nothing tunnels through the ground, got {:?}",
            body.position()
        );
    }
    assert!(world.spatial_index().is_some());
    Ok(())
}

#[test]
fn build_and_run_a_small_3d_scene() -> anyhow::Result<()> {
    let mut world = World3::new();

    let floor = world.add_body(Body3::new_static(Vec3::ZERO));
    world.add_shape(Shape::cuboid(Vec3::new(25.0, 1.0, 25.0), floor));

    for i in 0..5 {
        let body = world.add_body(Body3::new(Vec3::new(i as f32 * 2.5 - 5.0, 6.0, 0.0)));
        world.bodies[body].set_mass(2.0);
        let shape = if i % 2 == 0 {
            Shape::sphere(1.0, body).with_restitution(0.3)
        } else {
            Shape::cuboid(Vec3::splat(0.8), body)
        };
        world.add_shape(shape);
    }

    let spinner = world.add_body(Body3::new(Vec3::new(0.0, 12.0, 3.0)));
    world.bodies[spinner].angular_velocity = Vec3::new(0.0, 2.0, 0.0);
    world.add_shape(Shape::cuboid(Vec3::splat(0.5), spinner));

    for _ in 0..300 {
        world.step(1.0 / 60.0)?;
    }

    let rotation = world.bodies[spinner].rotation();
    assert!(
        rotation != Quat::IDENTITY,
        "angular velocity must integrate into the rotation"
    );
    for body in &world.bodies {
        assert!(body.position().y > -5.0, "everything stays above the floor");
    }
    Ok(())
}
