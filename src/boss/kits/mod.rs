//! Boss domain: per-species attack kits.
//!
//! A kit owns the cooldowns and selection logic for one boss species. The
//! state machine and routine driver are generic over this trait, so a new
//! boss is a new kit component plus three system registrations.

mod bigfoot;
mod mothman;
mod wendigo;

pub use bigfoot::BigfootKit;
pub use mothman::MothmanKit;
pub use wendigo::WendigoKit;

use bevy::ecs::component::Mutable;
use bevy::prelude::Component;
use rand_chacha::ChaCha8Rng;

use crate::boss::attack::AttackRoutine;

pub trait BossKit: Component<Mutability = Mutable> {
    const NAME: &'static str;

    /// Tick every attack cooldown. Called exactly once per tick regardless of
    /// state, so gauges keep charging while the boss roams or recovers.
    fn tick_cooldowns(&mut self, dt: f32);

    /// Cheap range/cooldown check used to gate the Chase -> Attack
    /// transition. Must not roll randomness or mutate anything.
    fn can_attack(&self, dist: f32) -> bool;

    /// Pick and arm an attack for the current distance. Arms the chosen
    /// attack's cooldown. `None` means nothing was eligible after all; the
    /// boss simply keeps chasing.
    fn select_attack(
        &mut self,
        dist: f32,
        health_fraction: f32,
        rng: &mut ChaCha8Rng,
    ) -> Option<AttackRoutine>;
}
