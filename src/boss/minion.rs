//! Boss domain: summoned pack minions.
//!
//! Minions are deliberately dumb: run straight at the hunter and bite on a
//! cooldown. They die to the shared damage pipeline like anything else.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::boss::components::Boss;
use crate::boss::steering::{face_direction, planar, seek_velocity};
use crate::combat::{DamageEvent, Health, KnockbackBody, Team};
use crate::content::MinionTuning;
use crate::hunter::Hunter;
use crate::sim::GameLayer;

#[derive(Component, Debug)]
pub struct Minion {
    pub damage: f32,
    pub speed: f32,
    pub attack_range: f32,
    pub attack_cooldown: f32,
    pub cooldown: f32,
}

pub(crate) fn spawn_minion(
    commands: &mut Commands,
    tuning: &MinionTuning,
    position: Vec3,
) -> Entity {
    commands
        .spawn((
            Minion {
                damage: tuning.damage,
                speed: tuning.speed,
                attack_range: tuning.attack_range,
                attack_cooldown: tuning.attack_cooldown,
                cooldown: 0.0,
            },
            Health::new(tuning.health),
            Team::Boss,
            KnockbackBody::Impulse {
                up_fraction: 0.3,
                max_speed: 20.0,
            },
            RigidBody::Dynamic,
            Collider::sphere(0.4),
            LockedAxes::ROTATION_LOCKED,
            Friction::new(0.2),
            CollisionLayers::new(
                GameLayer::Minion,
                [GameLayer::Ground, GameLayer::Obstacle, GameLayer::Hunter],
            ),
            Transform::from_translation(position + Vec3::Y * 0.5),
        ))
        .id()
}

pub(crate) fn minion_ai(
    time: Res<Time>,
    mut damage_events: MessageWriter<DamageEvent>,
    hunter_query: Query<(Entity, &Transform), (With<Hunter>, Without<Minion>)>,
    mut minions: Query<
        (Entity, &mut Minion, &mut Transform, &mut LinearVelocity),
        Without<Boss>,
    >,
) {
    let dt = time.delta_secs();
    let hunter = hunter_query.iter().next();

    for (entity, mut minion, mut transform, mut velocity) in &mut minions {
        if minion.cooldown > 0.0 {
            minion.cooldown -= dt;
        }

        let Some((hunter_entity, hunter_transform)) = hunter else {
            velocity.x = 0.0;
            velocity.z = 0.0;
            continue;
        };

        let position = transform.translation;
        let target = hunter_transform.translation;
        let dist = planar(target - position).length();

        if dist > minion.attack_range {
            let desired = seek_velocity(position, target, minion.speed);
            velocity.x = desired.x;
            velocity.z = desired.z;
            face_direction(&mut transform, desired, 10.0, dt);
        } else {
            velocity.x = 0.0;
            velocity.z = 0.0;
            if minion.cooldown <= 0.0 {
                minion.cooldown = minion.attack_cooldown;
                damage_events.write(DamageEvent {
                    source: entity,
                    target: hunter_entity,
                    amount: minion.damage,
                    knockback: Vec3::ZERO,
                });
            }
        }
    }
}
