//! Bigfoot kit: swipe up close, rush or leap at range with a rush-heavy coin
//! flip when both are live.

use bevy::prelude::Component;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::boss::attack::{
    AttackRoutine, LeapSlamRoutine, RushRoutine, SwipeRoutine,
};
use crate::boss::kits::BossKit;
use crate::content::BigfootTuning;

#[derive(Component)]
pub struct BigfootKit {
    pub tuning: BigfootTuning,
    pub swipe_cooldown: f32,
    pub rush_cooldown: f32,
    pub leap_cooldown: f32,
}

impl BigfootKit {
    pub fn new(tuning: BigfootTuning) -> Self {
        Self {
            tuning,
            swipe_cooldown: 0.0,
            rush_cooldown: 0.0,
            leap_cooldown: 0.0,
        }
    }

    /// Zero swipe damage disables the attack outright, so a content file can
    /// turn a moveset entry off without touching code.
    pub fn swipe_ready(&self, dist: f32) -> bool {
        self.tuning.swipe.damage > 0.0
            && self.swipe_cooldown <= 0.0
            && dist <= self.tuning.swipe.range
    }

    pub fn rush_ready(&self, dist: f32) -> bool {
        self.tuning.rush.damage > 0.0
            && self.rush_cooldown <= 0.0
            && dist >= self.tuning.rush.min_range
            && dist <= self.tuning.rush.max_range
    }

    pub fn leap_ready(&self, dist: f32) -> bool {
        self.tuning.leap.damage > 0.0
            && self.leap_cooldown <= 0.0
            && dist >= self.tuning.leap.min_range
            && dist <= self.tuning.leap.max_range
    }
}

impl BossKit for BigfootKit {
    const NAME: &'static str = "bigfoot";

    fn tick_cooldowns(&mut self, dt: f32) {
        if self.swipe_cooldown > 0.0 {
            self.swipe_cooldown -= dt;
        }
        if self.rush_cooldown > 0.0 {
            self.rush_cooldown -= dt;
        }
        if self.leap_cooldown > 0.0 {
            self.leap_cooldown -= dt;
        }
    }

    fn can_attack(&self, dist: f32) -> bool {
        self.swipe_ready(dist) || self.rush_ready(dist) || self.leap_ready(dist)
    }

    fn select_attack(
        &mut self,
        dist: f32,
        _health_fraction: f32,
        rng: &mut ChaCha8Rng,
    ) -> Option<AttackRoutine> {
        // Melee takes priority when the hunter is already in reach.
        if self.swipe_ready(dist) {
            self.swipe_cooldown = self.tuning.swipe.cooldown;
            return Some(AttackRoutine::Swipe(SwipeRoutine::new(
                self.tuning.swipe.clone(),
            )));
        }

        let rush = self.rush_ready(dist);
        let leap = self.leap_ready(dist);
        let pick_rush = match (rush, leap) {
            (true, true) => rng.random_bool(self.tuning.rush_over_leap_bias as f64),
            (true, false) => true,
            (false, true) => false,
            (false, false) => return None,
        };

        if pick_rush {
            self.rush_cooldown = self.tuning.rush.cooldown;
            Some(AttackRoutine::Rush(RushRoutine::new(
                self.tuning.rush.clone(),
            )))
        } else {
            self.leap_cooldown = self.tuning.leap.cooldown;
            Some(AttackRoutine::LeapSlam(LeapSlamRoutine::new(
                self.tuning.leap.clone(),
            )))
        }
    }
}
