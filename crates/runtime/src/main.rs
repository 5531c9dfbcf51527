#![deny(clippy::all)]

use anyhow::Result;
use collision::{Body3, Shape, World3};
use glam::Vec3;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Building demo world...");
    let mut world = World3::new();

    let floor = world.add_body(Body3::new_static(Vec3::ZERO));
    world.add_shape(Shape::cuboid(Vec3::new(50.0, 1.0, 50.0), floor));

    for i in 0..12u32 {
        let column = (i % 4) as f32;
        let row = (i / 4) as f32;
        let body = world.add_body(Body3::new(Vec3::new(
            column * 2.5 - 4.0,
            6.0 + row * 3.0,
            row * 2.5 - 2.5,
        )));
        let shape = if i % 2 == 0 {
            Shape::sphere(1.0, body).with_restitution(0.4)
        } else {
            Shape::cuboid(Vec3::splat(0.8), body)
        };
        world.add_shape(shape);
    }

    let dt = 1.0 / 60.0;
    let num_steps = 600;
    tracing::info!("Starting tick loop for {} steps with dt = {}...", num_steps, dt);

    for i in 0..num_steps {
        let report = match world.step(dt) {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("Tick {} failed: {e}", i);
                break;
            }
        };
        if (i + 1) % 120 == 0 {
            tracing::info!(
                "Tick {} complete: {} narrow tests, {} contacts, {} bodies moved.",
                i + 1,
                report.narrow_tests,
                report.contacts,
                report.moved.len()
            );
        }
    }

    tracing::info!("Tick loop finished after {} steps.", num_steps);
    for (index, body) in world.bodies.iter().enumerate().skip(1) {
        tracing::info!("Body {}: position {:?}", index, body.position());
    }

    Ok(())
}
