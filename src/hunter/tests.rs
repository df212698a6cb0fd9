//! Hunter domain: locomotion gating tests.

use bevy::prelude::Vec3;

use super::control_velocity;

#[test]
fn test_control_velocity_moves_at_speed() {
    let v = control_velocity(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 5.0, false);
    assert_eq!(v, Vec3::new(5.0, 0.0, 0.0));
}

#[test]
fn test_control_velocity_normalizes_diagonals() {
    let v = control_velocity(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0), 5.0, false);
    assert!((v.length() - 5.0).abs() < 1e-4);
}

#[test]
fn test_stun_zeroes_planar_movement_but_keeps_fall() {
    let current = Vec3::new(3.0, -2.0, 1.0);
    let v = control_velocity(current, Vec3::new(1.0, 0.0, 0.0), 5.0, true);
    assert_eq!(v, Vec3::new(0.0, -2.0, 0.0));
}

#[test]
fn test_vertical_input_is_ignored() {
    let v = control_velocity(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), 5.0, false);
    assert_eq!(v, Vec3::ZERO);
}
