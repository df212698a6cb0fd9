//! Wendigo kit: a skirmisher. Summons a pack once badly hurt, hops away when
//! crowded, swipes in close, and mixes rush with bone bolts at mid range.

use bevy::prelude::Component;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::boss::attack::{
    AttackRoutine, BoltRoutine, EvadeRoutine, RushRoutine, SummonRoutine, SwipeRoutine,
};
use crate::boss::kits::BossKit;
use crate::content::WendigoTuning;

#[derive(Component)]
pub struct WendigoKit {
    pub tuning: WendigoTuning,
    pub swipe_cooldown: f32,
    pub rush_cooldown: f32,
    pub bolt_cooldown: f32,
    pub summon_cooldown: f32,
    pub evade_cooldown: f32,
}

impl WendigoKit {
    pub fn new(tuning: WendigoTuning) -> Self {
        Self {
            tuning,
            swipe_cooldown: 0.0,
            rush_cooldown: 0.0,
            bolt_cooldown: 0.0,
            summon_cooldown: 0.0,
            evade_cooldown: 0.0,
        }
    }

    pub fn summon_ready(&self, health_fraction: f32) -> bool {
        self.tuning.summon.count > 0
            && self.summon_cooldown <= 0.0
            && health_fraction <= self.tuning.summon_health_fraction
    }

    pub fn evade_ready(&self, dist: f32) -> bool {
        self.evade_cooldown <= 0.0 && dist <= self.tuning.evade.trigger_range
    }

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

    pub fn bolt_ready(&self, dist: f32) -> bool {
        self.tuning.bolt.damage > 0.0
            && self.bolt_cooldown <= 0.0
            && dist <= self.tuning.bolt.range
    }
}

impl BossKit for WendigoKit {
    const NAME: &'static str = "wendigo";

    fn tick_cooldowns(&mut self, dt: f32) {
        if self.swipe_cooldown > 0.0 {
            self.swipe_cooldown -= dt;
        }
        if self.rush_cooldown > 0.0 {
            self.rush_cooldown -= dt;
        }
        if self.bolt_cooldown > 0.0 {
            self.bolt_cooldown -= dt;
        }
        if self.summon_cooldown > 0.0 {
            self.summon_cooldown -= dt;
        }
        if self.evade_cooldown > 0.0 {
            self.evade_cooldown -= dt;
        }
    }

    fn can_attack(&self, dist: f32) -> bool {
        // The health-gated summon is checked at selection time; everything
        // here is pure range and cooldown.
        self.evade_ready(dist)
            || self.swipe_ready(dist)
            || self.rush_ready(dist)
            || self.bolt_ready(dist)
    }

    fn select_attack(
        &mut self,
        dist: f32,
        health_fraction: f32,
        rng: &mut ChaCha8Rng,
    ) -> Option<AttackRoutine> {
        if self.summon_ready(health_fraction) {
            self.summon_cooldown = self.tuning.summon.cooldown;
            return Some(AttackRoutine::Summon(SummonRoutine::new(
                self.tuning.summon.clone(),
            )));
        }

        if self.evade_ready(dist) {
            self.evade_cooldown = self.tuning.evade.cooldown;
            return Some(AttackRoutine::Evade(EvadeRoutine::new(
                self.tuning.evade.clone(),
            )));
        }

        if self.swipe_ready(dist) {
            self.swipe_cooldown = self.tuning.swipe.cooldown;
            return Some(AttackRoutine::Swipe(SwipeRoutine::new(
                self.tuning.swipe.clone(),
            )));
        }

        let rush = self.rush_ready(dist);
        let bolt = self.bolt_ready(dist);
        let pick_bolt = match (rush, bolt) {
            (true, true) => rng.random_bool(self.tuning.ranged_bias as f64),
            (false, true) => true,
            (true, false) => false,
            (false, false) => return None,
        };

        if pick_bolt {
            self.bolt_cooldown = self.tuning.bolt.cooldown;
            Some(AttackRoutine::Bolt(BoltRoutine::new(
                self.tuning.bolt.clone(),
            )))
        } else {
            self.rush_cooldown = self.tuning.rush.cooldown;
            Some(AttackRoutine::Rush(RushRoutine::new(
                self.tuning.rush.clone(),
            )))
        }
    }
}
