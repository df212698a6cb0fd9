//! Mothman kit: the blinding shriek always wins when it is live; otherwise a
//! weighted pick between the claw swoop and the homing spit bolt.

use bevy::prelude::Component;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::boss::attack::{AttackRoutine, BoltRoutine, ShriekRoutine, SwoopRoutine};
use crate::boss::kits::BossKit;
use crate::content::MothmanTuning;

#[derive(Component)]
pub struct MothmanKit {
    pub tuning: MothmanTuning,
    pub swoop_cooldown: f32,
    pub bolt_cooldown: f32,
    pub shriek_cooldown: f32,
}

impl MothmanKit {
    pub fn new(tuning: MothmanTuning) -> Self {
        Self {
            tuning,
            swoop_cooldown: 0.0,
            bolt_cooldown: 0.0,
            shriek_cooldown: 0.0,
        }
    }

    pub fn shriek_ready(&self, dist: f32) -> bool {
        self.shriek_cooldown <= 0.0 && dist <= self.tuning.shriek.radius
    }

    pub fn swoop_ready(&self, dist: f32) -> bool {
        self.tuning.swoop.damage > 0.0
            && self.swoop_cooldown <= 0.0
            && dist <= self.tuning.swoop.range
    }

    pub fn bolt_ready(&self, dist: f32) -> bool {
        self.tuning.bolt.damage > 0.0
            && self.bolt_cooldown <= 0.0
            && dist <= self.tuning.bolt.range
    }
}

impl BossKit for MothmanKit {
    const NAME: &'static str = "mothman";

    fn tick_cooldowns(&mut self, dt: f32) {
        if self.swoop_cooldown > 0.0 {
            self.swoop_cooldown -= dt;
        }
        if self.bolt_cooldown > 0.0 {
            self.bolt_cooldown -= dt;
        }
        if self.shriek_cooldown > 0.0 {
            self.shriek_cooldown -= dt;
        }
    }

    fn can_attack(&self, dist: f32) -> bool {
        self.shriek_ready(dist) || self.swoop_ready(dist) || self.bolt_ready(dist)
    }

    fn select_attack(
        &mut self,
        dist: f32,
        _health_fraction: f32,
        rng: &mut ChaCha8Rng,
    ) -> Option<AttackRoutine> {
        if self.shriek_ready(dist) {
            self.shriek_cooldown = self.tuning.shriek.cooldown;
            return Some(AttackRoutine::Shriek(ShriekRoutine::new(
                self.tuning.shriek.clone(),
            )));
        }

        let swoop = self.swoop_ready(dist);
        let bolt = self.bolt_ready(dist);
        let pick_swoop = match (swoop, bolt) {
            (true, true) => rng.random_bool(self.tuning.melee_bias as f64),
            (true, false) => true,
            (false, true) => false,
            (false, false) => return None,
        };

        if pick_swoop {
            self.swoop_cooldown = self.tuning.swoop.cooldown;
            Some(AttackRoutine::Swoop(SwoopRoutine::new(
                self.tuning.swoop.clone(),
            )))
        } else {
            self.bolt_cooldown = self.tuning.bolt.cooldown;
            Some(AttackRoutine::Bolt(BoltRoutine::new(
                self.tuning.bolt.clone(),
            )))
        }
    }
}
