//! Hunter domain: the target the bosses fight.
//!
//! The hunter here is a plain controller body with scripted input. It exists
//! so the boss layer has something real to perceive, chase, and hit; actual
//! player input would drive `HunterController` the same way.

#[cfg(test)]
mod tests;

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::combat::{ActiveSlide, Health, KnockbackBody, StatusEffects, Team};
use crate::content::GameplayTuning;
use crate::sim::{GameLayer, SimSet};

#[derive(Component)]
pub struct Hunter;

/// Where attacks should aim relative to the feet-level transform.
#[derive(Component, Debug, Clone, Copy)]
pub struct CenterOffset(pub Vec3);

/// Scripted movement input. A demo system or a test writes `move_dir`; the
/// locomotion system turns it into velocity when the hunter is able to move.
#[derive(Component, Debug, Default)]
pub struct HunterController {
    pub move_dir: Vec3,
    pub speed: f32,
}

/// Planar velocity for the controller this tick. Stun zeroes movement;
/// vertical velocity is left to gravity.
pub fn control_velocity(current: Vec3, move_dir: Vec3, speed: f32, stunned: bool) -> Vec3 {
    if stunned {
        return Vec3::new(0.0, current.y, 0.0);
    }
    let planar = Vec3::new(move_dir.x, 0.0, move_dir.z).normalize_or_zero() * speed;
    Vec3::new(planar.x, current.y, planar.z)
}

pub(crate) fn hunter_locomotion(
    mut query: Query<
        (&HunterController, &StatusEffects, &mut LinearVelocity),
        (With<Hunter>, Without<ActiveSlide>),
    >,
) {
    for (controller, status, mut velocity) in &mut query {
        velocity.0 = control_velocity(
            velocity.0,
            controller.move_dir,
            controller.speed,
            status.is_stunned(),
        );
    }
}

pub fn spawn_hunter(commands: &mut Commands, tuning: &GameplayTuning, position: Vec3) -> Entity {
    commands
        .spawn((
            (
                Hunter,
                CenterOffset(Vec3::Y * 0.9),
                HunterController {
                    move_dir: Vec3::ZERO,
                    speed: tuning.hunter_speed,
                },
                Health::new(tuning.hunter_health),
                Team::Hunter,
                StatusEffects::default(),
                KnockbackBody::Slide {
                    multiplier: tuning.knockback.slide_multiplier,
                    duration: tuning.knockback.slide_duration,
                    damping: tuning.knockback.slide_damping,
                },
            ),
            (
                RigidBody::Dynamic,
                Collider::capsule(0.4, 1.0),
                LockedAxes::ROTATION_LOCKED,
                Friction::new(0.0),
                CollisionLayers::new(
                    GameLayer::Hunter,
                    [
                        GameLayer::Ground,
                        GameLayer::Obstacle,
                        GameLayer::Boss,
                        GameLayer::Minion,
                        GameLayer::Projectile,
                    ],
                ),
                Transform::from_translation(position),
            ),
        ))
        .id()
}

pub struct HunterPlugin;

impl Plugin for HunterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, hunter_locomotion.in_set(SimSet::Act));
    }
}
