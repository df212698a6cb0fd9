//! Boss domain: roam target selection and the per-tick roam step.

use std::f32::consts::TAU;

use avian3d::prelude::*;
use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::boss::components::{Avoidance, BossAgent, Flight, Motion, RoamParams, StuckTracker};
use crate::boss::steering::{
    avoidance_accel, brake_planar, clamp_planar_speed, face_direction, forward, ground_probe,
    planar, seek_velocity, steer_accel,
};

/// Sample points in a disc around the spawn anchor until one sits on ground
/// and is a meaningful hop away from where the boss stands. The very first
/// pick after spawn skips the hop filter; the boss has nowhere it needs to
/// move away from yet. Falls back to a grounded-but-close point, then to a
/// raw candidate, then to the anchor.
pub fn pick_roam_target(
    spawn: Vec3,
    current: Vec3,
    params: &RoamParams,
    rng: &mut ChaCha8Rng,
    first_pick: bool,
    mut probe: impl FnMut(Vec3) -> Option<Vec3>,
) -> Vec3 {
    let mut grounded_fallback = None;
    let mut raw_fallback = None;

    for _ in 0..8 {
        let angle = rng.random_range(0.0..TAU);
        let radius = params.roam_radius * rng.random::<f32>().sqrt();
        let candidate = spawn + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);

        match probe(candidate) {
            Some(grounded) => {
                if first_pick || planar(grounded - current).length() >= params.min_hop_distance {
                    return grounded;
                }
                grounded_fallback.get_or_insert(grounded);
            }
            None => {
                raw_fallback.get_or_insert(candidate);
            }
        }
    }

    grounded_fallback.or(raw_fallback).unwrap_or(spawn)
}

/// One roam tick: dwell in place, wander toward the target, and repick on
/// arrival or when the stuck tracker fires.
#[allow(clippy::too_many_arguments)]
pub(crate) fn roam_step(
    dt: f32,
    spatial: &SpatialQuery,
    rng: &mut ChaCha8Rng,
    entity: Entity,
    agent: &mut BossAgent,
    tracker: &mut StuckTracker,
    motion: &Motion,
    params: &RoamParams,
    avoid: &Avoidance,
    flight: Option<&Flight>,
    transform: &mut Transform,
    velocity: &mut LinearVelocity,
) {
    if agent.dwell_timer > 0.0 {
        agent.dwell_timer -= dt;
        brake_planar(velocity);
        return;
    }

    let position = transform.translation;
    let arrived = planar(agent.roam_target - position).length() <= params.arrive_radius;
    let speed = planar(velocity.0).length();

    if arrived || tracker.is_stuck(speed) {
        if !arrived {
            debug!("boss {:?} stuck, repicking roam target", entity);
        }
        // Inverted dwell bounds from a tuning file degrade to a fixed dwell.
        let dwell_max = params.dwell_max.max(params.dwell_min);
        agent.dwell_timer = rng.random_range(params.dwell_min..=dwell_max);
        agent.roam_target = pick_roam_target(
            agent.spawn_point,
            position,
            params,
            rng,
            agent.first_roam_pick,
            |p| ground_probe(spatial, p),
        );
        agent.first_roam_pick = false;
        tracker.reset_after_pick();
        brake_planar(velocity);
        return;
    }

    let desired = seek_velocity(position, agent.roam_target, motion.max_speed);
    let mut accel = steer_accel(desired, velocity.0, motion.max_accel);
    accel += avoidance_accel(spatial, position, velocity.0, forward(transform), avoid);
    velocity.0 += accel * dt;

    if let Some(flight) = flight {
        apply_flight(spatial, position, velocity, flight);
    }
    velocity.0 = clamp_planar_speed(velocity.0, motion.max_speed);
    face_direction(transform, velocity.0, motion.turn_lerp, dt);
}

/// Command vertical velocity toward cruise altitude over the ground below.
pub(crate) fn apply_flight(
    spatial: &SpatialQuery,
    position: Vec3,
    velocity: &mut LinearVelocity,
    flight: &Flight,
) {
    let ground_y = ground_probe(spatial, position).map(|p| p.y).unwrap_or(0.0);
    let target_y = ground_y + flight.cruise_altitude;
    velocity.y = ((target_y - position.y) * flight.altitude_lerp)
        .clamp(-flight.vertical_speed, flight.vertical_speed);
}
