//! Boss domain: planar steering math and obstacle avoidance probes.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::boss::components::Avoidance;
use crate::sim::GameLayer;

/// Below this squared length a direction is treated as "no direction".
pub const FACING_DEADZONE_SQ: f32 = 0.0025;

pub fn planar(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    planar(b - a).length()
}

/// Desired planar velocity toward a point at the given speed. Zero inside a
/// tiny deadzone so the body settles instead of jittering.
pub fn seek_velocity(from: Vec3, to: Vec3, speed: f32) -> Vec3 {
    let to_target = planar(to - from);
    if to_target.length_squared() < 1e-4 {
        return Vec3::ZERO;
    }
    to_target.normalize() * speed
}

/// Acceleration that moves the current planar velocity toward the desired
/// one, clamped so tuning caps how hard a boss can turn or brake.
pub fn steer_accel(desired: Vec3, velocity: Vec3, max_accel: f32) -> Vec3 {
    (desired - planar(velocity)).clamp_length_max(max_accel)
}

/// Cap horizontal speed while leaving vertical velocity alone.
pub fn clamp_planar_speed(velocity: Vec3, cap: f32) -> Vec3 {
    let horizontal = planar(velocity);
    if horizontal.length_squared() <= cap * cap {
        return velocity;
    }
    let capped = horizontal.normalize() * cap;
    Vec3::new(capped.x, velocity.y, capped.z)
}

pub fn brake_planar(velocity: &mut LinearVelocity) {
    velocity.x = 0.0;
    velocity.z = 0.0;
}

/// Yaw-only rotation looking along `dir`, or `None` inside the deadzone.
pub fn yaw_towards(dir: Vec3) -> Option<Quat> {
    let flat = planar(dir);
    if flat.length_squared() < FACING_DEADZONE_SQ {
        return None;
    }
    Some(Quat::from_rotation_y(flat.x.atan2(flat.z)))
}

pub fn forward(transform: &Transform) -> Vec3 {
    transform.rotation * Vec3::Z
}

pub fn face_direction(transform: &mut Transform, dir: Vec3, turn_lerp: f32, dt: f32) {
    if let Some(target) = yaw_towards(dir) {
        let t = (turn_lerp * dt).clamp(0.0, 1.0);
        transform.rotation = transform.rotation.slerp(target, t);
    }
}

pub fn face_point(transform: &mut Transform, point: Vec3, turn_lerp: f32, dt: f32) {
    let dir = point - transform.translation;
    face_direction(transform, dir, turn_lerp, dt);
}

/// Three probes along the travel direction. A forward hit pushes along the
/// obstacle normal; whisker hits push sideways away from the blocked side.
/// A body at rest probes along its facing so it deflects on the very first
/// acceleration tick instead of driving into a wall it is already looking at.
pub(crate) fn avoidance_accel(
    spatial: &SpatialQuery,
    origin: Vec3,
    velocity: Vec3,
    facing: Vec3,
    avoid: &Avoidance,
) -> Vec3 {
    let travel = planar(velocity);
    let fwd = if travel.length_squared() < 0.01 {
        let flat = planar(facing);
        if flat.length_squared() < FACING_DEADZONE_SQ {
            return Vec3::ZERO;
        }
        flat.normalize()
    } else {
        travel.normalize()
    };
    let eye = origin + Vec3::Y * avoid.probe_height;
    let filter = SpatialQueryFilter::from_mask(GameLayer::Obstacle);

    let mut accel = Vec3::ZERO;

    if let Ok(dir) = Dir3::new(fwd) {
        if let Some(hit) = spatial.cast_ray(eye, dir, avoid.look_ahead, true, &filter) {
            accel += planar(hit.normal).normalize_or_zero() * avoid.strength;
        }
    }

    let left = Quat::from_rotation_y(avoid.whisker_angle) * fwd;
    if let Ok(dir) = Dir3::new(left) {
        if spatial
            .cast_ray(eye, dir, avoid.whisker_length, true, &filter)
            .is_some()
        {
            accel += Vec3::Y.cross(left).normalize_or_zero() * avoid.strength;
        }
    }

    let right = Quat::from_rotation_y(-avoid.whisker_angle) * fwd;
    if let Ok(dir) = Dir3::new(right) {
        if spatial
            .cast_ray(eye, dir, avoid.whisker_length, true, &filter)
            .is_some()
        {
            accel += right.cross(Vec3::Y).normalize_or_zero() * avoid.strength;
        }
    }

    accel
}

/// Drop a ray from well above the candidate point onto walkable ground.
pub(crate) fn ground_probe(spatial: &SpatialQuery, point: Vec3) -> Option<Vec3> {
    let origin = point + Vec3::Y * 10.0;
    let hit = spatial.cast_ray(
        origin,
        Dir3::NEG_Y,
        50.0,
        true,
        &SpatialQueryFilter::from_mask(GameLayer::Ground),
    )?;
    Some(origin + Vec3::NEG_Y * hit.distance)
}

/// True when a downward probe finds support just under the feet.
pub(crate) fn is_grounded(spatial: &SpatialQuery, position: Vec3, half_height: f32) -> bool {
    spatial
        .cast_ray(
            position,
            Dir3::NEG_Y,
            half_height + 0.2,
            true,
            &SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Obstacle]),
        )
        .is_some()
}
