//! Combat domain: shared components for anything that can deal or take hits.

use avian3d::prelude::LinearVelocity;
use bevy::prelude::*;

#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.current / self.max
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Boss,
    Hunter,
}

/// Stun and blind timers. Applying an effect that is already active keeps the
/// longer of the two durations rather than stacking them.
#[derive(Component, Debug, Clone, Default)]
pub struct StatusEffects {
    pub stun_timer: f32,
    pub blind_timer: f32,
}

impl StatusEffects {
    pub fn apply_stun(&mut self, duration: f32) {
        self.stun_timer = self.stun_timer.max(duration);
    }

    pub fn apply_blind(&mut self, duration: f32) {
        self.blind_timer = self.blind_timer.max(duration);
    }

    pub fn is_stunned(&self) -> bool {
        self.stun_timer > 0.0
    }

    pub fn is_blinded(&self) -> bool {
        self.blind_timer > 0.0
    }

    pub fn tick(&mut self, dt: f32) {
        if self.stun_timer > 0.0 {
            self.stun_timer -= dt;
        }
        if self.blind_timer > 0.0 {
            self.blind_timer -= dt;
        }
    }
}

/// How an entity's body reacts to knockback impulses.
///
/// Controller-driven bodies cannot just have velocity added, so they get a
/// short scripted slide; free rigid bodies take a plain impulse.
#[derive(Component, Debug, Clone, Copy)]
pub enum KnockbackBody {
    Slide {
        multiplier: f32,
        duration: f32,
        damping: f32,
    },
    Impulse {
        up_fraction: f32,
        max_speed: f32,
    },
}

/// Active knockback slide on a controller body. Overrides locomotion until
/// the timer runs out.
#[derive(Component, Debug, Clone)]
pub struct ActiveSlide {
    pub velocity: Vec3,
    pub timer: f32,
    pub damping: f32,
}

/// Ground marker showing where something is about to land. Despawned on a
/// timer, or earlier by whatever spawned it.
#[derive(Component, Debug)]
pub struct Telegraph {
    pub timer: f32,
}

/// Defeated body lingering before despawn.
#[derive(Component, Debug)]
pub struct Dying {
    pub timer: f32,
}

/// Compute the post-impulse velocity for a free rigid body: planar shove with
/// a fraction of the impulse converted into lift, clamped to a hard cap.
pub fn impulse_velocity(
    current: Vec3,
    knockback: Vec3,
    up_fraction: f32,
    max_speed: f32,
) -> Vec3 {
    let planar = Vec3::new(knockback.x, 0.0, knockback.z);
    let pushed = current + planar + Vec3::Y * planar.length() * up_fraction;
    pushed.clamp_length_max(max_speed)
}

pub(crate) fn apply_impulse(
    velocity: &mut LinearVelocity,
    knockback: Vec3,
    up_fraction: f32,
    max_speed: f32,
) {
    velocity.0 = impulse_velocity(velocity.0, knockback, up_fraction, max_speed);
}
