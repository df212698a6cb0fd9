//! Boss domain: shared components for the boss body and agent.

use avian3d::prelude::CollisionLayers;
use bevy::prelude::*;

use crate::content::{
    AvoidanceTuning, LocomotionTuning, PerceptionTuning, PersonalSpaceTuning, RoamTuning,
};

#[derive(Component)]
pub struct Boss;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossKind {
    Bigfoot,
    Mothman,
    Wendigo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossState {
    Roam,
    Chase,
    Attack,
    Recover,
    Dead,
}

/// Top-level agent state. One per boss; the kit component carries the
/// per-species attack repertoire.
#[derive(Component, Debug)]
pub struct BossAgent {
    pub state: BossState,
    pub spawn_point: Vec3,
    pub roam_target: Vec3,
    pub dwell_timer: f32,
    /// Shared gate across all attacks; ticked down every tick, re-armed when
    /// a routine finishes.
    pub attack_lockout: f32,
    pub global_lockout: f32,
    pub despawn_delay: f32,
    /// The first roam pick after spawn skips the minimum-hop filter.
    pub first_roam_pick: bool,
}

impl BossAgent {
    pub fn new(spawn_point: Vec3, global_lockout: f32, despawn_delay: f32) -> Self {
        Self {
            state: BossState::Roam,
            spawn_point,
            roam_target: spawn_point,
            dwell_timer: 0.0,
            attack_lockout: 0.0,
            global_lockout,
            despawn_delay,
            first_roam_pick: true,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Motion {
    pub max_speed: f32,
    pub chase_speed: f32,
    pub max_accel: f32,
    pub turn_lerp: f32,
}

impl From<&LocomotionTuning> for Motion {
    fn from(t: &LocomotionTuning) -> Self {
        Self {
            max_speed: t.max_speed,
            chase_speed: t.chase_speed,
            max_accel: t.max_accel,
            turn_lerp: t.turn_lerp,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Perception {
    pub aggro_range: f32,
    pub leash_range: f32,
}

impl From<&PerceptionTuning> for Perception {
    fn from(t: &PerceptionTuning) -> Self {
        Self {
            aggro_range: t.aggro_range,
            leash_range: t.leash_range,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct RoamParams {
    pub roam_radius: f32,
    pub min_hop_distance: f32,
    pub arrive_radius: f32,
    pub dwell_min: f32,
    pub dwell_max: f32,
}

impl From<&RoamTuning> for RoamParams {
    fn from(t: &RoamTuning) -> Self {
        Self {
            roam_radius: t.roam_radius,
            min_hop_distance: t.min_hop_distance,
            arrive_radius: t.arrive_radius,
            dwell_min: t.dwell_min,
            dwell_max: t.dwell_max,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Avoidance {
    pub strength: f32,
    pub look_ahead: f32,
    /// Radians.
    pub whisker_angle: f32,
    pub whisker_length: f32,
    pub probe_height: f32,
}

impl From<&AvoidanceTuning> for Avoidance {
    fn from(t: &AvoidanceTuning) -> Self {
        Self {
            strength: t.strength,
            look_ahead: t.look_ahead,
            whisker_angle: t.whisker_angle_deg.to_radians(),
            whisker_length: t.whisker_length,
            probe_height: t.probe_height,
        }
    }
}

/// Hover parameters for flying bosses. Vertical velocity is commanded
/// directly; these bodies run with gravity off.
#[derive(Component, Debug, Clone)]
pub struct Flight {
    pub cruise_altitude: f32,
    pub altitude_lerp: f32,
    pub vertical_speed: f32,
}

/// Keeps a flier from parking on top of the hunter between attacks.
#[derive(Component, Debug, Clone)]
pub struct PersonalSpace {
    pub min_distance: f32,
    pub push_accel: f32,
}

impl From<&PersonalSpaceTuning> for PersonalSpace {
    fn from(t: &PersonalSpaceTuning) -> Self {
        Self {
            min_distance: t.min_distance,
            push_accel: t.push_accel,
        }
    }
}

/// Downward probe geometry for landing detection.
#[derive(Component, Debug, Clone, Copy)]
pub struct Grounding {
    pub half_height: f32,
}

/// Detects a boss grinding against geometry instead of making progress
/// toward its roam target. Samples planar displacement on a short window.
#[derive(Component, Debug)]
pub struct StuckTracker {
    pub grace: f32,
    pub repick_cooldown: f32,
    pub sample_timer: f32,
    pub last_sample: Vec3,
    pub moved_sq: f32,
}

pub const STUCK_GRACE: f32 = 0.6;
pub const STUCK_SAMPLE_INTERVAL: f32 = 0.4;
pub const STUCK_REPICK_COOLDOWN: f32 = 0.4;
/// Planar displacement below this (squared meters) per sample window counts
/// as not moving.
pub const STUCK_MOVED_SQ: f32 = 0.04;
pub const STUCK_SPEED: f32 = 0.05;

impl Default for StuckTracker {
    fn default() -> Self {
        Self {
            grace: STUCK_GRACE,
            repick_cooldown: 0.0,
            sample_timer: STUCK_SAMPLE_INTERVAL,
            last_sample: Vec3::ZERO,
            // Seeded high so the first window never reads as stuck.
            moved_sq: f32::MAX,
        }
    }
}

impl StuckTracker {
    pub fn tick(&mut self, dt: f32, position: Vec3) {
        if self.grace > 0.0 {
            self.grace -= dt;
        }
        if self.repick_cooldown > 0.0 {
            self.repick_cooldown -= dt;
        }
        self.sample_timer -= dt;
        if self.sample_timer <= 0.0 {
            let delta = position - self.last_sample;
            self.moved_sq = delta.x * delta.x + delta.z * delta.z;
            self.last_sample = position;
            self.sample_timer = STUCK_SAMPLE_INTERVAL;
        }
    }

    pub fn is_stuck(&self, planar_speed: f32) -> bool {
        self.grace <= 0.0
            && self.repick_cooldown <= 0.0
            && self.moved_sq < STUCK_MOVED_SQ
            && planar_speed < STUCK_SPEED
    }

    pub fn reset_after_pick(&mut self) {
        self.grace = STUCK_GRACE;
        self.repick_cooldown = STUCK_REPICK_COOLDOWN;
        self.moved_sq = f32::MAX;
        self.sample_timer = STUCK_SAMPLE_INTERVAL;
    }
}

/// Temporarily drops the hunter from the boss's collision filters so a rush
/// shove does not grind the two bodies together. Restores on expiry.
#[derive(Component, Debug)]
pub struct CollisionMute {
    pub timer: f32,
    pub restore: Option<CollisionLayers>,
}

impl CollisionMute {
    pub fn new(timer: f32) -> Self {
        Self {
            timer,
            restore: None,
        }
    }
}
