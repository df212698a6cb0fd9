//! Boss domain: the Roam/Chase/Attack/Recover/Dead state machine.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::boss::attack::ActiveAttack;
use crate::boss::components::{
    Avoidance, Boss, BossAgent, BossState, CollisionMute, Flight, Motion, Perception,
    PersonalSpace, RoamParams, StuckTracker,
};
use crate::boss::kits::BossKit;
use crate::boss::roam::{apply_flight, roam_step};
use crate::boss::steering::{
    avoidance_accel, brake_planar, clamp_planar_speed, face_point, forward, planar,
    planar_distance, seek_velocity, steer_accel,
};
use crate::combat::{BossDefeatedEvent, DeathEvent, Dying, Health};
use crate::hunter::Hunter;
use crate::sim::{GameLayer, SimRng};

/// Steering-level transitions. Attack, Recover, and Dead manage their own
/// exits; this only decides when chasing starts and when the leash breaks.
pub fn next_steering_state(
    state: BossState,
    dist: Option<f32>,
    aggro_range: f32,
    leash_range: f32,
) -> BossState {
    match (state, dist) {
        (BossState::Roam, Some(d)) if d <= aggro_range => BossState::Chase,
        (BossState::Chase, None) => BossState::Roam,
        (BossState::Chase, Some(d)) if d > leash_range => BossState::Roam,
        _ => state,
    }
}

/// Cooldowns and the stuck tracker run every tick no matter what state the
/// boss is in.
pub(crate) fn tick_boss_timers<K: BossKit>(
    time: Res<Time>,
    mut query: Query<(&mut BossAgent, &mut K, &mut StuckTracker, &Transform)>,
) {
    let dt = time.delta_secs();
    for (mut agent, mut kit, mut tracker, transform) in &mut query {
        if agent.attack_lockout > 0.0 {
            agent.attack_lockout -= dt;
        }
        kit.tick_cooldowns(dt);
        tracker.tick(dt, transform.translation);
    }
}

/// One decision tick per boss. A transition detected here acts the same
/// tick: a boss that aggroes starts chasing immediately, and a boss that
/// selects an attack begins its windup before the tick resolves.
#[allow(clippy::type_complexity)]
pub(crate) fn update_boss_machine<K: BossKit>(
    time: Res<Time>,
    spatial: SpatialQuery,
    mut rng: ResMut<SimRng>,
    mut commands: Commands,
    hunter_query: Query<&Transform, (With<Hunter>, Without<Boss>)>,
    mut boss_query: Query<
        (
            Entity,
            &mut BossAgent,
            &mut K,
            &mut StuckTracker,
            &Motion,
            &Perception,
            &RoamParams,
            &Avoidance,
            Option<&Flight>,
            &mut Transform,
            &mut LinearVelocity,
            &Health,
        ),
        (With<Boss>, Without<ActiveAttack>),
    >,
) {
    let dt = time.delta_secs();
    let hunter_pos = hunter_query.iter().next().map(|t| t.translation);

    for (
        entity,
        mut agent,
        mut kit,
        mut tracker,
        motion,
        perception,
        roam_params,
        avoidance,
        flight,
        mut transform,
        mut velocity,
        health,
    ) in &mut boss_query
    {
        if agent.state == BossState::Dead || health.is_dead() {
            continue;
        }

        let position = transform.translation;
        let dist = hunter_pos.map(|p| planar_distance(position, p));

        let previous = agent.state;
        agent.state = next_steering_state(
            previous,
            dist,
            perception.aggro_range,
            perception.leash_range,
        );
        if agent.state != previous {
            debug!(
                "{} {:?}: {:?} -> {:?}",
                K::NAME,
                entity,
                previous,
                agent.state
            );
            if agent.state == BossState::Roam {
                // Re-anchor so the first roam tick dwells and picks fresh.
                agent.roam_target = position;
                agent.dwell_timer = 0.0;
            }
        }

        match agent.state {
            BossState::Roam => {
                roam_step(
                    dt,
                    &spatial,
                    &mut rng.0,
                    entity,
                    &mut agent,
                    &mut tracker,
                    motion,
                    roam_params,
                    avoidance,
                    flight,
                    &mut transform,
                    &mut velocity,
                );
            }
            BossState::Chase => {
                let Some(target) = hunter_pos else {
                    continue;
                };

                let desired = seek_velocity(position, target, motion.chase_speed);
                let mut accel = steer_accel(desired, velocity.0, motion.max_accel);
                accel += avoidance_accel(
                    &spatial,
                    position,
                    velocity.0,
                    forward(&transform),
                    avoidance,
                );
                velocity.0 += accel * dt;
                if let Some(flight) = flight {
                    apply_flight(&spatial, position, &mut velocity, flight);
                }
                velocity.0 = clamp_planar_speed(velocity.0, motion.chase_speed);
                face_point(&mut transform, target, motion.turn_lerp, dt);

                let d = dist.unwrap_or(f32::MAX);
                if agent.attack_lockout <= 0.0 && kit.can_attack(d) {
                    if let Some(routine) = kit.select_attack(d, health.fraction(), &mut rng.0) {
                        info!("{} {:?} opens {}", K::NAME, entity, routine.name());
                        agent.state = BossState::Attack;
                        commands.entity(entity).insert(ActiveAttack(routine));
                    }
                }
            }
            // Owned by the routine driver; unreachable while this system
            // filters on Without<ActiveAttack>.
            BossState::Attack => {}
            BossState::Recover => {
                // One-tick settle out of an attack. The lockout only gates
                // the next Attack entry from Chase; it does not pin the boss
                // here.
                brake_planar(&mut velocity);
                if let Some(target) = hunter_pos {
                    face_point(&mut transform, target, motion.turn_lerp, dt);
                }
                agent.state = match dist {
                    Some(d) if d <= perception.leash_range => BossState::Chase,
                    _ => {
                        agent.roam_target = position;
                        agent.dwell_timer = 0.0;
                        BossState::Roam
                    }
                };
            }
            BossState::Dead => {}
        }
    }
}

/// Fliers drift off the hunter between attacks instead of hovering on top of
/// them.
pub(crate) fn maintain_personal_space(
    time: Res<Time>,
    hunter_query: Query<&Transform, (With<Hunter>, Without<Boss>)>,
    mut boss_query: Query<
        (&PersonalSpace, &Transform, &mut LinearVelocity),
        (With<Boss>, Without<ActiveAttack>, Without<Hunter>),
    >,
) {
    let dt = time.delta_secs();
    let Some(hunter) = hunter_query.iter().next() else {
        return;
    };

    for (space, transform, mut velocity) in &mut boss_query {
        let away = planar(transform.translation - hunter.translation);
        let d = away.length();
        if d >= space.min_distance || d < 1e-4 {
            continue;
        }
        velocity.0 += away.normalize() * space.push_accel * dt;
    }
}

/// Swap the boss's collision filters out while a mute is active, restoring
/// the originals on expiry.
pub(crate) fn tick_collision_mutes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut CollisionMute, &mut CollisionLayers)>,
) {
    let dt = time.delta_secs();
    for (entity, mut mute, mut layers) in &mut query {
        if mute.restore.is_none() {
            mute.restore = Some(*layers);
            *layers = CollisionLayers::new(
                GameLayer::Boss,
                [GameLayer::Ground, GameLayer::Obstacle],
            );
        }

        mute.timer -= dt;
        if mute.timer <= 0.0 {
            if let Some(original) = mute.restore.take() {
                *layers = original;
            }
            commands.entity(entity).remove::<CollisionMute>();
        }
    }
}

/// Death cancels everything the same tick it lands: the routine is dropped,
/// the body stops and stops colliding, and the corpse lingers briefly before
/// despawn.
pub(crate) fn process_boss_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    mut defeated_events: MessageWriter<BossDefeatedEvent>,
    mut query: Query<
        (&mut BossAgent, &mut LinearVelocity, &mut CollisionLayers),
        With<Boss>,
    >,
) {
    for event in death_events.read() {
        let Ok((mut agent, mut velocity, mut layers)) = query.get_mut(event.entity) else {
            continue;
        };
        if agent.state == BossState::Dead {
            continue;
        }

        agent.state = BossState::Dead;
        velocity.0 = Vec3::ZERO;
        *layers = CollisionLayers::NONE;
        commands
            .entity(event.entity)
            .remove::<ActiveAttack>()
            .remove::<CollisionMute>()
            .insert((
                Dying {
                    timer: agent.despawn_delay,
                },
                GravityScale(0.0),
            ));

        info!("boss {:?} defeated", event.entity);
        defeated_events.write(BossDefeatedEvent { boss: event.entity });
    }
}
