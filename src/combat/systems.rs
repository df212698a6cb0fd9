//! Combat domain: damage, status, knockback, and death resolution.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::boss::Boss;
use crate::combat::components::{
    apply_impulse, ActiveSlide, Dying, Health, KnockbackBody, StatusEffects, Telegraph,
};
use crate::combat::events::{DamageEvent, DeathEvent, StatusEvent, StatusKind};
use crate::hunter::Hunter;

pub(crate) fn tick_status_effects(time: Res<Time>, mut query: Query<&mut StatusEffects>) {
    let dt = time.delta_secs();
    for mut status in &mut query {
        status.tick(dt);
    }
}

pub(crate) fn tick_telegraphs(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Telegraph)>,
) {
    let dt = time.delta_secs();
    for (entity, mut telegraph) in &mut query {
        telegraph.timer -= dt;
        if telegraph.timer <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn tick_dying(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Dying)>,
) {
    let dt = time.delta_secs();
    for (entity, mut dying) in &mut query {
        dying.timer -= dt;
        if dying.timer <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut query: Query<&mut Health>,
) {
    for event in damage_events.read() {
        let Ok(mut health) = query.get_mut(event.target) else {
            continue;
        };
        if health.is_dead() {
            continue;
        }

        health.take_damage(event.amount);
        debug!(
            "{:?} took {} damage from {:?} ({}/{})",
            event.target, event.amount, event.source, health.current, health.max
        );

        if health.is_dead() {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

pub(crate) fn apply_status_effects(
    mut status_events: MessageReader<StatusEvent>,
    mut query: Query<&mut StatusEffects>,
) {
    for event in status_events.read() {
        let Ok(mut status) = query.get_mut(event.target) else {
            continue;
        };
        match event.kind {
            StatusKind::Stun(duration) => {
                status.apply_stun(duration);
                debug!("{:?} stunned for {}s", event.target, duration);
            }
            StatusKind::Blind(duration) => {
                status.apply_blind(duration);
                debug!("{:?} blinded for {}s", event.target, duration);
            }
        }
    }
}

/// Route knockback through the body-appropriate path: a scripted slide for
/// controller bodies, a velocity impulse for free rigid bodies.
pub(crate) fn apply_knockback(
    mut commands: Commands,
    mut damage_events: MessageReader<DamageEvent>,
    mut query: Query<(&KnockbackBody, &mut LinearVelocity)>,
) {
    for event in damage_events.read() {
        if event.knockback == Vec3::ZERO {
            continue;
        }
        let Ok((body, mut velocity)) = query.get_mut(event.target) else {
            continue;
        };

        match *body {
            KnockbackBody::Slide {
                multiplier,
                duration,
                damping,
            } => {
                let planar = Vec3::new(event.knockback.x, 0.0, event.knockback.z);
                commands.entity(event.target).insert(ActiveSlide {
                    velocity: planar * multiplier,
                    timer: duration,
                    damping,
                });
            }
            KnockbackBody::Impulse {
                up_fraction,
                max_speed,
            } => {
                apply_impulse(&mut velocity, event.knockback, up_fraction, max_speed);
            }
        }
    }
}

/// Drive active knockback slides. The slide owns the planar velocity while it
/// lasts, decaying toward rest.
pub(crate) fn drive_slides(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut ActiveSlide, &mut LinearVelocity)>,
) {
    let dt = time.delta_secs();
    for (entity, mut slide, mut velocity) in &mut query {
        slide.timer -= dt;
        if slide.timer <= 0.0 {
            velocity.x = 0.0;
            velocity.z = 0.0;
            commands.entity(entity).remove::<ActiveSlide>();
            continue;
        }

        let damping = slide.damping;
        let decayed = slide.velocity.lerp(Vec3::ZERO, (damping * dt).clamp(0.0, 1.0));
        slide.velocity = decayed;
        velocity.x = decayed.x;
        velocity.z = decayed.z;
    }
}

/// Despawn dead hunters and minions. Boss deaths are handled by the boss
/// domain, which wants the body to linger.
pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    query: Query<(Option<&Boss>, Option<&Hunter>)>,
) {
    for event in death_events.read() {
        let Ok((boss, hunter)) = query.get(event.entity) else {
            continue;
        };
        if boss.is_some() {
            continue;
        }
        if hunter.is_some() {
            info!("hunter {:?} is down", event.entity);
        }
        commands.entity(event.entity).despawn();
    }
}
