use collision::{Aabb, Body3, Bvh, BvhEntry, Shape, World3};
use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec3;

fn grid_world(side: usize) -> World3 {
    let mut world = World3::new();
    let floor = world.add_body(Body3::new_static(Vec3::ZERO));
    world.add_shape(Shape::cuboid(Vec3::new(100.0, 1.0, 100.0), floor));
    for x in 0..side {
        for z in 0..side {
            let body = world.add_body(Body3::new(Vec3::new(
                x as f32 * 2.5 - side as f32,
                5.0,
                z as f32 * 2.5 - side as f32,
            )));
            world.add_shape(Shape::sphere(1.0, body));
        }
    }
    world
}

fn bench_world_step(c: &mut Criterion) {
    let mut world = grid_world(10);
    c.bench_function("world3_step_100_spheres", |b| {
        b.iter(|| world.step(1.0 / 60.0).unwrap());
    });
}

fn bench_bvh_rebuild(c: &mut Criterion) {
    fastrand::seed(42);
    let entries: Vec<BvhEntry> = (0..1000)
        .map(|payload| {
            let position = Vec3::new(
                fastrand::f32() * 200.0,
                fastrand::f32() * 200.0,
                fastrand::f32() * 200.0,
            );
            BvhEntry {
                position,
                bounds: Aabb::from_center_half_extents(position, Vec3::ONE),
                payload,
            }
        })
        .collect();
    c.bench_function("bvh_build_1000", |b| {
        b.iter(|| Bvh::build(entries.clone()));
    });
    let bvh = Bvh::build(entries);
    let region = Aabb::from_center_half_extents(Vec3::splat(100.0), Vec3::splat(25.0));
    c.bench_function("bvh_query_1000", |b| {
        b.iter(|| bvh.query(&region));
    });
}

criterion_group!(benches, bench_world_step, bench_bvh_rebuild);
criterion_main!(benches);
