//! Boss domain: attack routines.
//!
//! A routine is resumable state advanced one tick at a time by
//! `drive_attack_routines`. Every routine moves through windup, active, and
//! recovery on its own timers, applies damage at most once per activation,
//! and degrades gracefully when the target disappears mid-swing: timers keep
//! running and the boss whiffs instead of freezing.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::boss::components::{
    Boss, BossAgent, BossState, CollisionMute, Grounding, Motion,
};
use crate::boss::minion::spawn_minion;
use crate::boss::steering::{
    brake_planar, clamp_planar_speed, face_direction, face_point, forward, ground_probe,
    is_grounded, planar, planar_distance, seek_velocity, steer_accel,
};
use crate::combat::{spawn_bolt, DamageEvent, StatusEvent, StatusKind, Telegraph};
use crate::content::{
    BoltTuning, EvadeTuning, LeapTuning, RushTuning, ShriekTuning, SummonTuning, SwipeTuning,
    SwoopTuning,
};
use crate::hunter::{CenterOffset, Hunter};
use crate::sim::GameLayer;

/// Hard ceiling on how long a leap may stay airborne before the routine
/// forces itself onward.
const LEAP_MAX_AIRBORNE: f32 = 3.0;
/// How long a rush ignores hunter collision after connecting.
const RUSH_MUTE_TIME: f32 = 0.25;

/// Everything a routine may touch during one tick.
pub(crate) struct RoutineCtx<'a, 'w1, 's1, 'w2, 's2, 'w3, 'w4> {
    pub dt: f32,
    pub entity: Entity,
    pub transform: &'a mut Transform,
    pub velocity: &'a mut LinearVelocity,
    pub motion: &'a Motion,
    pub grounding: Grounding,
    pub target: Option<TargetSnapshot>,
    pub spatial: &'a SpatialQuery<'w1, 's1>,
    pub commands: &'a mut Commands<'w2, 's2>,
    pub damage: &'a mut MessageWriter<'w3, DamageEvent>,
    pub status: &'a mut MessageWriter<'w4, StatusEvent>,
    /// Gravity magnitude, positive.
    pub gravity: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct TargetSnapshot {
    pub entity: Entity,
    pub pos: Vec3,
    pub center: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineStatus {
    Running,
    Finished,
}

/// The routine currently owning a boss's body. While present, the state
/// machine leaves steering and facing to the routine.
#[derive(Component)]
pub struct ActiveAttack(pub AttackRoutine);

pub enum AttackRoutine {
    Swipe(SwipeRoutine),
    Rush(RushRoutine),
    LeapSlam(LeapSlamRoutine),
    Swoop(SwoopRoutine),
    Bolt(BoltRoutine),
    Shriek(ShriekRoutine),
    Summon(SummonRoutine),
    Evade(EvadeRoutine),
}

impl AttackRoutine {
    pub fn name(&self) -> &'static str {
        match self {
            AttackRoutine::Swipe(_) => "swipe",
            AttackRoutine::Rush(_) => "rush",
            AttackRoutine::LeapSlam(_) => "leap_slam",
            AttackRoutine::Swoop(_) => "swoop",
            AttackRoutine::Bolt(_) => "bolt",
            AttackRoutine::Shriek(_) => "shriek",
            AttackRoutine::Summon(_) => "summon",
            AttackRoutine::Evade(_) => "evade",
        }
    }

    pub(crate) fn step(&mut self, ctx: &mut RoutineCtx) -> RoutineStatus {
        match self {
            AttackRoutine::Swipe(r) => r.step(ctx),
            AttackRoutine::Rush(r) => r.step(ctx),
            AttackRoutine::LeapSlam(r) => r.step(ctx),
            AttackRoutine::Swoop(r) => r.step(ctx),
            AttackRoutine::Bolt(r) => r.step(ctx),
            AttackRoutine::Shriek(r) => r.step(ctx),
            AttackRoutine::Summon(r) => r.step(ctx),
            AttackRoutine::Evade(r) => r.step(ctx),
        }
    }
}

// -----------------------------------------------------------------------------
// Swipe
// -----------------------------------------------------------------------------

enum SwipePhase {
    Windup(f32),
    Recover(f32),
}

/// Stationary melee arc. The strike lands on the single tick between windup
/// and recovery; losing the target mid-windup means the swing whiffs.
pub struct SwipeRoutine {
    tuning: SwipeTuning,
    phase: SwipePhase,
}

impl SwipeRoutine {
    pub fn new(tuning: SwipeTuning) -> Self {
        let windup = tuning.windup;
        Self {
            tuning,
            phase: SwipePhase::Windup(windup),
        }
    }

    fn strike(&self, ctx: &mut RoutineCtx) {
        let anchor = ctx.transform.translation
            + ctx.transform.rotation
                * Vec3::new(0.0, self.tuning.offset_up, self.tuning.offset_forward);
        let hits = ctx.spatial.shape_intersections(
            &Collider::sphere(self.tuning.radius),
            anchor,
            Quat::IDENTITY,
            &SpatialQueryFilter::from_mask(GameLayer::Hunter),
        );
        // One hit per swing.
        if let Some(target) = hits.into_iter().next() {
            ctx.damage.write(DamageEvent {
                source: ctx.entity,
                target,
                amount: self.tuning.damage,
                knockback: Vec3::ZERO,
            });
        }
    }

    fn step(&mut self, ctx: &mut RoutineCtx) -> RoutineStatus {
        brake_planar(ctx.velocity);
        match &mut self.phase {
            SwipePhase::Windup(t) => {
                if let Some(target) = ctx.target {
                    face_point(ctx.transform, target.pos, ctx.motion.turn_lerp, ctx.dt);
                }
                *t -= ctx.dt;
                if *t <= 0.0 {
                    self.strike(ctx);
                    self.phase = SwipePhase::Recover(self.tuning.recover);
                }
                RoutineStatus::Running
            }
            SwipePhase::Recover(t) => {
                *t -= ctx.dt;
                if *t <= 0.0 {
                    RoutineStatus::Finished
                } else {
                    RoutineStatus::Running
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Rush
// -----------------------------------------------------------------------------

enum RushPhase {
    Charge,
    Rest(f32),
}

/// Shoulder charge. Steers toward the hunter at rush speed until either the
/// body check connects or the charge times out, then rests briefly.
pub struct RushRoutine {
    tuning: RushTuning,
    phase: RushPhase,
    elapsed: f32,
    hit: bool,
}

impl RushRoutine {
    pub fn new(tuning: RushTuning) -> Self {
        Self {
            tuning,
            phase: RushPhase::Charge,
            elapsed: 0.0,
            hit: false,
        }
    }

    fn step(&mut self, ctx: &mut RoutineCtx) -> RoutineStatus {
        match &mut self.phase {
            RushPhase::Charge => {
                let Some(target) = ctx.target else {
                    brake_planar(ctx.velocity);
                    self.phase = RushPhase::Rest(self.tuning.rest);
                    return RoutineStatus::Running;
                };

                let position = ctx.transform.translation;
                face_point(ctx.transform, target.pos, ctx.motion.turn_lerp * 1.5, ctx.dt);
                let desired = seek_velocity(position, target.pos, self.tuning.speed);
                let accel = steer_accel(desired, ctx.velocity.0, ctx.motion.max_accel * 2.0);
                ctx.velocity.0 += accel * ctx.dt;
                ctx.velocity.0 = clamp_planar_speed(ctx.velocity.0, self.tuning.speed);

                self.elapsed += ctx.dt;

                if !self.hit {
                    let hits = ctx.spatial.shape_intersections(
                        &Collider::capsule(self.tuning.body_radius, 1.2),
                        position + Vec3::Y * 1.0,
                        Quat::IDENTITY,
                        &SpatialQueryFilter::from_mask(GameLayer::Hunter),
                    );
                    if let Some(hit) = hits.into_iter().next() {
                        let dir = planar(target.center - position)
                            .try_normalize()
                            .unwrap_or_else(|| planar(forward(ctx.transform)).normalize_or_zero());
                        ctx.damage.write(DamageEvent {
                            source: ctx.entity,
                            target: hit,
                            amount: self.tuning.damage,
                            knockback: dir * self.tuning.knockback,
                        });
                        self.hit = true;
                        ctx.commands
                            .entity(ctx.entity)
                            .insert(CollisionMute::new(RUSH_MUTE_TIME));
                        brake_planar(ctx.velocity);
                        self.phase = RushPhase::Rest(self.tuning.rest);
                        return RoutineStatus::Running;
                    }
                }

                if self.elapsed >= self.tuning.duration {
                    brake_planar(ctx.velocity);
                    self.phase = RushPhase::Rest(self.tuning.rest);
                }
                RoutineStatus::Running
            }
            RushPhase::Rest(t) => {
                brake_planar(ctx.velocity);
                *t -= ctx.dt;
                if *t <= 0.0 {
                    RoutineStatus::Finished
                } else {
                    RoutineStatus::Running
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Leap slam
// -----------------------------------------------------------------------------

enum LeapPhase {
    Telegraph(f32),
    Airborne,
    Flee(f32),
}

/// Telegraphed ballistic leap onto the hunter's position, ring-shaped impact
/// on landing, then a short flee. Standing at the epicenter dodges the ring.
pub struct LeapSlamRoutine {
    tuning: LeapTuning,
    phase: LeapPhase,
    target_point: Option<Vec3>,
    telegraph: Option<Entity>,
    airtime: f32,
    left_ground: bool,
}

impl LeapSlamRoutine {
    pub fn new(tuning: LeapTuning) -> Self {
        let telegraph_time = tuning.telegraph_time.max(0.05);
        Self {
            tuning,
            phase: LeapPhase::Telegraph(telegraph_time),
            target_point: None,
            telegraph: None,
            airtime: 0.0,
            left_ground: false,
        }
    }

    fn despawn_telegraph(&mut self, ctx: &mut RoutineCtx) {
        if let Some(entity) = self.telegraph.take() {
            ctx.commands.entity(entity).despawn();
        }
    }

    fn slam(&mut self, ctx: &mut RoutineCtx) {
        self.despawn_telegraph(ctx);
        brake_planar(ctx.velocity);

        let Some(target) = ctx.target else {
            return;
        };
        let position = ctx.transform.translation;
        let distance = planar_distance(position, target.pos);
        if distance < self.tuning.inner_radius || distance > self.tuning.outer_radius {
            return;
        }

        let dir = planar(target.pos - position)
            .try_normalize()
            .unwrap_or_else(|| planar(forward(ctx.transform)).normalize_or_zero());
        ctx.damage.write(DamageEvent {
            source: ctx.entity,
            target: target.entity,
            amount: self.tuning.damage,
            knockback: dir * self.tuning.knockback,
        });
        ctx.status.write(StatusEvent {
            target: target.entity,
            kind: StatusKind::Stun(self.tuning.stun),
        });
    }

    fn step(&mut self, ctx: &mut RoutineCtx) -> RoutineStatus {
        match &mut self.phase {
            LeapPhase::Telegraph(t) => {
                if self.target_point.is_none() {
                    let aim = ctx.target.map(|t| t.pos).unwrap_or_else(|| {
                        ctx.transform.translation
                            + planar(forward(ctx.transform)) * self.tuning.min_range
                    });
                    let ground = ground_probe(ctx.spatial, aim).unwrap_or(aim);
                    self.target_point = Some(ground);
                    self.telegraph = Some(
                        ctx.commands
                            .spawn((
                                Telegraph { timer: 4.0 },
                                Transform::from_translation(ground + Vec3::Y * 0.05),
                            ))
                            .id(),
                    );
                }

                let target_point = self.target_point.unwrap_or_default();
                brake_planar(ctx.velocity);
                face_point(ctx.transform, target_point, ctx.motion.turn_lerp, ctx.dt);

                *t -= ctx.dt;
                if *t <= 0.0 {
                    ctx.velocity.0 = launch_velocity(
                        ctx.transform.translation,
                        target_point,
                        &self.tuning,
                        ctx.gravity,
                    );
                    self.phase = LeapPhase::Airborne;
                }
                RoutineStatus::Running
            }
            LeapPhase::Airborne => {
                self.airtime += ctx.dt;
                let grounded = ctx.velocity.y <= 0.0
                    && is_grounded(
                        ctx.spatial,
                        ctx.transform.translation,
                        ctx.grounding.half_height,
                    );

                if !self.left_ground {
                    if !grounded {
                        self.left_ground = true;
                    }
                } else if grounded {
                    self.slam(ctx);
                    self.phase = LeapPhase::Flee(self.tuning.flee_time);
                    return RoutineStatus::Running;
                }

                if self.airtime >= LEAP_MAX_AIRBORNE {
                    debug!("boss {:?} leap never landed, forcing flee", ctx.entity);
                    self.despawn_telegraph(ctx);
                    self.phase = LeapPhase::Flee(self.tuning.flee_time);
                }
                RoutineStatus::Running
            }
            LeapPhase::Flee(t) => {
                let position = ctx.transform.translation;
                let away = ctx
                    .target
                    .and_then(|target| planar(position - target.pos).try_normalize())
                    .unwrap_or_else(|| -planar(forward(ctx.transform)).normalize_or_zero());
                ctx.velocity.x = away.x * self.tuning.flee_speed;
                ctx.velocity.z = away.z * self.tuning.flee_speed;
                face_direction(ctx.transform, away, ctx.motion.turn_lerp, ctx.dt);

                *t -= ctx.dt;
                if *t <= 0.0 {
                    brake_planar(ctx.velocity);
                    RoutineStatus::Finished
                } else {
                    RoutineStatus::Running
                }
            }
        }
    }
}

/// Ballistic launch velocity for a leap. Airtime interpolates between the
/// tuned bounds by how deep into the leap band the target sits, then the
/// vertical component is solved against gravity. The clamp can shorten an
/// extreme leap; the landing probe still ends it correctly.
pub fn launch_velocity(from: Vec3, to: Vec3, tuning: &LeapTuning, gravity: f32) -> Vec3 {
    let delta = to - from;
    let flat = planar(delta);
    let distance = flat.length();
    let span = (tuning.max_range - tuning.min_range).max(0.01);
    let frac = ((distance - tuning.min_range) / span).clamp(0.0, 1.0);
    let airtime = tuning.min_airtime + (tuning.max_airtime - tuning.min_airtime) * frac;

    let horizontal = flat / airtime;
    let vertical = delta.y / airtime + 0.5 * gravity * airtime;
    (horizontal + Vec3::Y * vertical).clamp_length_max(tuning.max_launch_speed)
}

// -----------------------------------------------------------------------------
// Swoop
// -----------------------------------------------------------------------------

enum SwoopPhase {
    Rise(f32),
    Dive,
    Recover(f32),
}

/// Flier melee: gain a little height, then dive through the hunter with a
/// claw check each tick. First contact deals the damage; the dive ends on
/// contact or timeout.
pub struct SwoopRoutine {
    tuning: SwoopTuning,
    phase: SwoopPhase,
    dive_elapsed: f32,
    hit: bool,
}

impl SwoopRoutine {
    pub fn new(tuning: SwoopTuning) -> Self {
        let rise = tuning.rise_time;
        Self {
            tuning,
            phase: SwoopPhase::Rise(rise),
            dive_elapsed: 0.0,
            hit: false,
        }
    }

    fn step(&mut self, ctx: &mut RoutineCtx) -> RoutineStatus {
        match &mut self.phase {
            SwoopPhase::Rise(t) => {
                ctx.velocity.0 = Vec3::new(
                    ctx.velocity.x * 0.5,
                    self.tuning.rise_speed,
                    ctx.velocity.z * 0.5,
                );
                if let Some(target) = ctx.target {
                    face_point(ctx.transform, target.pos, ctx.motion.turn_lerp, ctx.dt);
                }
                *t -= ctx.dt;
                if *t <= 0.0 {
                    self.phase = SwoopPhase::Dive;
                }
                RoutineStatus::Running
            }
            SwoopPhase::Dive => {
                let Some(target) = ctx.target else {
                    self.phase = SwoopPhase::Recover(self.tuning.recover);
                    return RoutineStatus::Running;
                };

                let position = ctx.transform.translation;
                let Some(dir) = (target.center - position).try_normalize() else {
                    self.phase = SwoopPhase::Recover(self.tuning.recover);
                    return RoutineStatus::Running;
                };
                ctx.velocity.0 = dir * self.tuning.dive_speed;
                face_direction(ctx.transform, dir, ctx.motion.turn_lerp * 1.5, ctx.dt);

                if !self.hit {
                    let claw = position + forward(ctx.transform) * 1.0;
                    if (target.center - claw).length() <= self.tuning.claw_radius {
                        self.hit = true;
                        ctx.damage.write(DamageEvent {
                            source: ctx.entity,
                            target: target.entity,
                            amount: self.tuning.damage,
                            knockback: Vec3::ZERO,
                        });
                    }
                }

                self.dive_elapsed += ctx.dt;
                if self.hit || self.dive_elapsed >= self.tuning.max_duration {
                    self.phase = SwoopPhase::Recover(self.tuning.recover);
                }
                RoutineStatus::Running
            }
            SwoopPhase::Recover(t) => {
                // Climb back toward cruise; the flight controller takes over
                // once the routine ends.
                ctx.velocity.0 = Vec3::Y * self.tuning.rise_speed * 0.5;
                *t -= ctx.dt;
                if *t <= 0.0 {
                    RoutineStatus::Finished
                } else {
                    RoutineStatus::Running
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Bolt
// -----------------------------------------------------------------------------

/// Brief windup, then a single homing bolt from the muzzle. No recovery of
/// its own; the shared lockout paces follow-ups.
pub struct BoltRoutine {
    tuning: BoltTuning,
    windup: f32,
}

impl BoltRoutine {
    pub fn new(tuning: BoltTuning) -> Self {
        let windup = tuning.windup;
        Self { tuning, windup }
    }

    fn step(&mut self, ctx: &mut RoutineCtx) -> RoutineStatus {
        brake_planar(ctx.velocity);
        if let Some(target) = ctx.target {
            face_point(ctx.transform, target.pos, ctx.motion.turn_lerp, ctx.dt);
        }

        self.windup -= ctx.dt;
        if self.windup > 0.0 {
            return RoutineStatus::Running;
        }

        let Some(target) = ctx.target else {
            return RoutineStatus::Finished;
        };
        let muzzle = ctx.transform.translation + Vec3::Y * 1.5 + forward(ctx.transform) * 1.0;
        let aim = target.center + Vec3::Y * 0.3 - muzzle;
        spawn_bolt(
            ctx.commands,
            ctx.entity,
            muzzle,
            aim,
            &self.tuning,
            Some(target.entity),
        );
        RoutineStatus::Finished
    }
}

// -----------------------------------------------------------------------------
// Shriek
// -----------------------------------------------------------------------------

enum ShriekPhase {
    Windup(f32),
    Settle(f32),
}

/// Area blind centered on the boss. No damage.
pub struct ShriekRoutine {
    tuning: ShriekTuning,
    phase: ShriekPhase,
}

impl ShriekRoutine {
    pub fn new(tuning: ShriekTuning) -> Self {
        let windup = tuning.windup;
        Self {
            tuning,
            phase: ShriekPhase::Windup(windup),
        }
    }

    fn step(&mut self, ctx: &mut RoutineCtx) -> RoutineStatus {
        brake_planar(ctx.velocity);
        match &mut self.phase {
            ShriekPhase::Windup(t) => {
                if let Some(target) = ctx.target {
                    face_point(ctx.transform, target.pos, ctx.motion.turn_lerp, ctx.dt);
                }
                *t -= ctx.dt;
                if *t <= 0.0 {
                    if let Some(target) = ctx.target {
                        if planar_distance(ctx.transform.translation, target.pos)
                            <= self.tuning.radius
                        {
                            ctx.status.write(StatusEvent {
                                target: target.entity,
                                kind: StatusKind::Blind(self.tuning.blind_duration),
                            });
                        }
                    }
                    self.phase = ShriekPhase::Settle(self.tuning.settle);
                }
                RoutineStatus::Running
            }
            ShriekPhase::Settle(t) => {
                *t -= ctx.dt;
                if *t <= 0.0 {
                    RoutineStatus::Finished
                } else {
                    RoutineStatus::Running
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Summon
// -----------------------------------------------------------------------------

enum SummonPhase {
    Windup(f32),
    Settle(f32),
}

/// Calls a ring of minions around the boss.
pub struct SummonRoutine {
    tuning: SummonTuning,
    phase: SummonPhase,
}

impl SummonRoutine {
    pub fn new(tuning: SummonTuning) -> Self {
        let windup = tuning.windup;
        Self {
            tuning,
            phase: SummonPhase::Windup(windup),
        }
    }

    fn step(&mut self, ctx: &mut RoutineCtx) -> RoutineStatus {
        brake_planar(ctx.velocity);
        match &mut self.phase {
            SummonPhase::Windup(t) => {
                *t -= ctx.dt;
                if *t <= 0.0 {
                    let center = ctx.transform.translation;
                    let count = self.tuning.count.max(1);
                    for i in 0..count {
                        let angle = std::f32::consts::TAU * i as f32 / count as f32;
                        let offset =
                            Vec3::new(angle.cos(), 0.0, angle.sin()) * self.tuning.ring_radius;
                        spawn_minion(ctx.commands, &self.tuning.minion, center + offset);
                    }
                    debug!("boss {:?} summoned {} minions", ctx.entity, count);
                    self.phase = SummonPhase::Settle(self.tuning.settle);
                }
                RoutineStatus::Running
            }
            SummonPhase::Settle(t) => {
                *t -= ctx.dt;
                if *t <= 0.0 {
                    RoutineStatus::Finished
                } else {
                    RoutineStatus::Running
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Evade
// -----------------------------------------------------------------------------

/// Backwards hop away from the hunter, facing them the whole way.
pub struct EvadeRoutine {
    tuning: EvadeTuning,
    timer: f32,
}

impl EvadeRoutine {
    pub fn new(tuning: EvadeTuning) -> Self {
        let timer = tuning.duration;
        Self { tuning, timer }
    }

    fn step(&mut self, ctx: &mut RoutineCtx) -> RoutineStatus {
        let position = ctx.transform.translation;
        let away = ctx
            .target
            .and_then(|target| planar(position - target.pos).try_normalize())
            .unwrap_or_else(|| -planar(forward(ctx.transform)).normalize_or_zero());
        ctx.velocity.x = away.x * self.tuning.speed;
        ctx.velocity.z = away.z * self.tuning.speed;
        if let Some(target) = ctx.target {
            face_point(ctx.transform, target.pos, ctx.motion.turn_lerp, ctx.dt);
        }

        self.timer -= ctx.dt;
        if self.timer <= 0.0 {
            brake_planar(ctx.velocity);
            RoutineStatus::Finished
        } else {
            RoutineStatus::Running
        }
    }
}

// -----------------------------------------------------------------------------
// Driver
// -----------------------------------------------------------------------------

/// Advance every boss's active routine one tick. On completion the shared
/// lockout is re-armed and the boss drops into Recover.
pub(crate) fn drive_attack_routines(
    time: Res<Time>,
    gravity: Res<Gravity>,
    spatial: SpatialQuery,
    mut commands: Commands,
    mut damage: MessageWriter<DamageEvent>,
    mut status: MessageWriter<StatusEvent>,
    hunter_query: Query<(Entity, &Transform, &CenterOffset), (With<Hunter>, Without<Boss>)>,
    mut boss_query: Query<
        (
            Entity,
            &mut BossAgent,
            &Motion,
            &Grounding,
            &mut ActiveAttack,
            &mut Transform,
            &mut LinearVelocity,
        ),
        With<Boss>,
    >,
) {
    let dt = time.delta_secs();
    let gravity_mag = -gravity.0.y;
    let target = hunter_query
        .iter()
        .next()
        .map(|(entity, transform, offset)| TargetSnapshot {
            entity,
            pos: transform.translation,
            center: transform.translation + offset.0,
        });

    for (entity, mut agent, motion, grounding, mut attack, mut transform, mut velocity) in
        &mut boss_query
    {
        if agent.state == BossState::Dead {
            continue;
        }

        let status_after = {
            let mut ctx = RoutineCtx {
                dt,
                entity,
                transform: &mut *transform,
                velocity: &mut *velocity,
                motion,
                grounding: *grounding,
                target,
                spatial: &spatial,
                commands: &mut commands,
                damage: &mut damage,
                status: &mut status,
                gravity: gravity_mag,
            };
            attack.0.step(&mut ctx)
        };

        if status_after == RoutineStatus::Finished {
            debug!("boss {:?} finished {}", entity, attack.0.name());
            agent.attack_lockout = agent.global_lockout;
            agent.state = BossState::Recover;
            commands.entity(entity).remove::<ActiveAttack>();
        }
    }
}
