use collision::{Body2, Body3, MIN_MASS};
use glam::{Vec2, Vec3};

#[test]
fn zero_mass_is_floored() {
    let mut body = Body2::new(Vec2::ZERO);
    body.set_mass(0.0);
    assert!(body.mass() >= MIN_MASS, "mass = {}", body.mass());
    assert!(body.inverse_mass().is_finite());
}

#[test]
fn negative_mass_is_floored() {
    let mut body = Body3::new(Vec3::ZERO);
    for mass in [-1.0, -1e-30, -f32::INFINITY] {
        body.set_mass(mass);
        assert!(body.mass() >= MIN_MASS, "setting {mass} left mass {}", body.mass());
        assert!(body.inverse_mass().is_finite());
    }
}

#[test]
fn tiny_positive_mass_is_floored_too() {
    let mut body = Body2::new(Vec2::ZERO);
    body.set_mass(1e-30);
    assert!(body.mass() >= MIN_MASS);
}

#[test]
fn ordinary_masses_pass_through() {
    let mut body = Body2::new(Vec2::ZERO);
    body.set_mass(12.5);
    assert_eq!(body.mass(), 12.5);
}
