//! Combat domain: homing bolt projectiles.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::Health;
use crate::combat::events::DamageEvent;
use crate::content::BoltTuning;
use crate::sim::GameLayer;

#[derive(Component, Debug)]
pub struct Projectile {
    pub damage: f32,
    pub owner: Entity,
    /// Entity the bolt gently curves toward, if still alive.
    pub target: Option<Entity>,
    pub speed: f32,
    pub homing_strength: f32,
    pub lifetime: f32,
}

pub(crate) fn spawn_bolt(
    commands: &mut Commands,
    owner: Entity,
    origin: Vec3,
    direction: Vec3,
    tuning: &BoltTuning,
    target: Option<Entity>,
) -> Entity {
    commands
        .spawn((
            Projectile {
                damage: tuning.damage,
                owner,
                target,
                speed: tuning.speed,
                homing_strength: tuning.homing_strength,
                lifetime: tuning.lifetime,
            },
            RigidBody::Dynamic,
            GravityScale(0.0),
            LockedAxes::ROTATION_LOCKED,
            Collider::sphere(0.25),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Projectile,
                [GameLayer::Hunter, GameLayer::Ground, GameLayer::Obstacle],
            ),
            LinearVelocity(direction.normalize_or_zero() * tuning.speed),
            Transform::from_translation(origin),
        ))
        .id()
}

/// Blend the current velocity toward the target a little each tick. The bolt
/// keeps its cruise speed; only the heading drifts.
pub fn homed_velocity(current: Vec3, to_target: Vec3, speed: f32, homing: f32, dt: f32) -> Vec3 {
    let desired = to_target.normalize_or_zero() * speed;
    if desired == Vec3::ZERO {
        return current;
    }
    current.lerp(desired, (homing * dt).clamp(0.0, 1.0))
}

pub(crate) fn steer_projectiles(
    time: Res<Time>,
    target_query: Query<&Transform, Without<Projectile>>,
    mut projectiles: Query<(&Projectile, &Transform, &mut LinearVelocity)>,
) {
    let dt = time.delta_secs();
    for (projectile, transform, mut velocity) in &mut projectiles {
        let Some(target) = projectile.target else {
            continue;
        };
        let Ok(target_transform) = target_query.get(target) else {
            continue;
        };
        let to_target = target_transform.translation + Vec3::Y * 0.9 - transform.translation;
        velocity.0 = homed_velocity(
            velocity.0,
            to_target,
            projectile.speed,
            projectile.homing_strength,
            dt,
        );
    }
}

pub(crate) fn tick_projectile_lifetimes(
    mut commands: Commands,
    time: Res<Time>,
    mut projectiles: Query<(Entity, &mut Projectile)>,
) {
    let dt = time.delta_secs();
    for (entity, mut projectile) in &mut projectiles {
        projectile.lifetime -= dt;
        if projectile.lifetime <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

/// Resolve bolt contacts. Hitting the owner is ignored; anything with health
/// takes the hit, and any contact consumes the bolt.
pub(crate) fn detect_projectile_hits(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    projectiles: Query<&Projectile>,
    targets: Query<(), With<Health>>,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (projectile_entity, other) in pairs {
            let Ok(projectile) = projectiles.get(projectile_entity) else {
                continue;
            };
            if other == projectile.owner {
                continue;
            }

            if targets.get(other).is_ok() {
                damage_events.write(DamageEvent {
                    source: projectile.owner,
                    target: other,
                    amount: projectile.damage,
                    knockback: Vec3::ZERO,
                });
            }

            commands.entity(projectile_entity).despawn();
        }
    }
}
