//! Boss domain: spawn bundles for each species.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::boss::components::{
    Avoidance, Boss, BossAgent, BossKind, Grounding, Motion, Perception, PersonalSpace,
    RoamParams, StuckTracker,
};
use crate::boss::components::Flight;
use crate::boss::kits::{BigfootKit, MothmanKit, WendigoKit};
use crate::combat::{Health, KnockbackBody, Team};
use crate::content::BossContent;
use crate::sim::GameLayer;

fn boss_collision_layers() -> CollisionLayers {
    CollisionLayers::new(
        GameLayer::Boss,
        [
            GameLayer::Ground,
            GameLayer::Obstacle,
            GameLayer::Hunter,
            GameLayer::Boss,
        ],
    )
}

pub fn spawn_bigfoot(commands: &mut Commands, content: &BossContent, position: Vec3) -> Entity {
    let tuning = content.bigfoot.clone();
    let entity = commands
        .spawn((
            (
                Boss,
                BossKind::Bigfoot,
                BossAgent::new(
                    position,
                    tuning.attack_lockout,
                    content.gameplay.boss_despawn_delay,
                ),
                StuckTracker::default(),
                Motion::from(&tuning.locomotion),
                Perception::from(&tuning.perception),
                RoamParams::from(&tuning.roam),
                Avoidance::from(&tuning.avoidance),
                Grounding { half_height: 1.3 },
            ),
            (
                Health::new(tuning.health),
                Team::Boss,
                KnockbackBody::Impulse {
                    up_fraction: 0.15,
                    max_speed: 14.0,
                },
            ),
            (
                RigidBody::Dynamic,
                Collider::capsule(0.7, 1.2),
                LockedAxes::ROTATION_LOCKED,
                Friction::new(0.4),
                boss_collision_layers(),
                Transform::from_translation(position),
            ),
            BigfootKit::new(tuning),
        ))
        .id();
    info!("spawned bigfoot {:?} at {}", entity, position);
    entity
}

pub fn spawn_mothman(commands: &mut Commands, content: &BossContent, position: Vec3) -> Entity {
    let tuning = content.mothman.clone();
    let entity = commands
        .spawn((
            (
                Boss,
                BossKind::Mothman,
                BossAgent::new(
                    position,
                    tuning.attack_lockout,
                    content.gameplay.boss_despawn_delay,
                ),
                StuckTracker::default(),
                Motion::from(&tuning.locomotion),
                Perception::from(&tuning.perception),
                RoamParams::from(&tuning.roam),
                Avoidance::from(&tuning.avoidance),
                Grounding { half_height: 1.0 },
                Flight {
                    cruise_altitude: tuning.flight.cruise_altitude,
                    altitude_lerp: tuning.flight.altitude_lerp,
                    vertical_speed: tuning.flight.vertical_speed,
                },
                PersonalSpace::from(&tuning.personal_space),
            ),
            (
                Health::new(tuning.health),
                Team::Boss,
                KnockbackBody::Impulse {
                    up_fraction: 0.1,
                    max_speed: 12.0,
                },
            ),
            (
                RigidBody::Dynamic,
                GravityScale(0.0),
                Collider::capsule(0.6, 1.0),
                LockedAxes::ROTATION_LOCKED,
                Friction::new(0.0),
                boss_collision_layers(),
                Transform::from_translation(position),
            ),
            MothmanKit::new(tuning),
        ))
        .id();
    info!("spawned mothman {:?} at {}", entity, position);
    entity
}

pub fn spawn_wendigo(commands: &mut Commands, content: &BossContent, position: Vec3) -> Entity {
    let tuning = content.wendigo.clone();
    let entity = commands
        .spawn((
            (
                Boss,
                BossKind::Wendigo,
                BossAgent::new(
                    position,
                    tuning.attack_lockout,
                    content.gameplay.boss_despawn_delay,
                ),
                StuckTracker::default(),
                Motion::from(&tuning.locomotion),
                Perception::from(&tuning.perception),
                RoamParams::from(&tuning.roam),
                Avoidance::from(&tuning.avoidance),
                Grounding { half_height: 1.1 },
            ),
            (
                Health::new(tuning.health),
                Team::Boss,
                KnockbackBody::Impulse {
                    up_fraction: 0.2,
                    max_speed: 16.0,
                },
            ),
            (
                RigidBody::Dynamic,
                Collider::capsule(0.55, 1.1),
                LockedAxes::ROTATION_LOCKED,
                Friction::new(0.3),
                boss_collision_layers(),
                Transform::from_translation(position),
            ),
            WendigoKit::new(tuning),
        ))
        .id();
    info!("spawned wendigo {:?} at {}", entity, position);
    entity
}
