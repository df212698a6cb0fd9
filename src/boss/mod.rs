//! Boss domain: steering, roaming, the state machine, attack routines, kits,
//! and minions.

mod attack;
mod components;
mod kits;
mod machine;
mod minion;
mod roam;
mod spawn;
mod steering;

#[cfg(test)]
mod tests;

pub use attack::{
    launch_velocity, ActiveAttack, AttackRoutine, BoltRoutine, EvadeRoutine, LeapSlamRoutine,
    RushRoutine, ShriekRoutine, SummonRoutine, SwipeRoutine, SwoopRoutine,
};
pub use components::{
    Avoidance, Boss, BossAgent, BossKind, BossState, CollisionMute, Flight, Grounding, Motion,
    Perception, PersonalSpace, RoamParams, StuckTracker,
};
pub use kits::{BigfootKit, BossKit, MothmanKit, WendigoKit};
pub use machine::next_steering_state;
pub use minion::Minion;
pub use roam::pick_roam_target;
pub use spawn::{spawn_bigfoot, spawn_mothman, spawn_wendigo};
pub use steering::{
    clamp_planar_speed, face_direction, face_point, forward, planar, planar_distance,
    seek_velocity, steer_accel, yaw_towards,
};

use bevy::prelude::*;

use crate::sim::SimSet;

pub struct BossPlugin;

impl Plugin for BossPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                machine::tick_boss_timers::<BigfootKit>,
                machine::tick_boss_timers::<MothmanKit>,
                machine::tick_boss_timers::<WendigoKit>,
                machine::tick_collision_mutes,
            )
                .in_set(SimSet::Timers),
        )
        .add_systems(
            FixedUpdate,
            (
                machine::update_boss_machine::<BigfootKit>,
                machine::update_boss_machine::<MothmanKit>,
                machine::update_boss_machine::<WendigoKit>,
                minion::minion_ai,
            )
                .in_set(SimSet::Decide),
        )
        .add_systems(
            FixedUpdate,
            (attack::drive_attack_routines, machine::maintain_personal_space)
                .in_set(SimSet::Act),
        )
        .add_systems(
            FixedUpdate,
            machine::process_boss_deaths
                .in_set(SimSet::Resolve)
                .after(crate::combat::apply_damage),
        );
    }
}
