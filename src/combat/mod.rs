//! Combat domain: health, damage resolution, status effects, knockback, and
//! projectiles.

mod components;
mod events;
mod projectile;
mod systems;


pub use components::{
    impulse_velocity, ActiveSlide, Dying, Health, KnockbackBody, StatusEffects, Team, Telegraph,
};
pub use events::{BossDefeatedEvent, DamageEvent, DeathEvent, StatusEvent, StatusKind};
pub use projectile::{homed_velocity, Projectile};

pub(crate) use projectile::spawn_bolt;
pub(crate) use systems::apply_damage;

use bevy::prelude::*;

use crate::sim::SimSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DamageEvent>()
            .add_message::<StatusEvent>()
            .add_message::<DeathEvent>()
            .add_message::<BossDefeatedEvent>()
            .add_systems(
                FixedUpdate,
                (
                    systems::tick_status_effects,
                    systems::tick_telegraphs,
                    systems::tick_dying,
                    projectile::tick_projectile_lifetimes,
                )
                    .in_set(SimSet::Timers),
            )
            .add_systems(
                FixedUpdate,
                (
                    projectile::steer_projectiles,
                    systems::drive_slides.after(crate::hunter::hunter_locomotion),
                )
                    .in_set(SimSet::Act),
            )
            .add_systems(
                FixedUpdate,
                (
                    projectile::detect_projectile_hits,
                    systems::apply_damage,
                    systems::apply_status_effects,
                    systems::apply_knockback,
                    systems::process_deaths,
                )
                    .chain()
                    .in_set(SimSet::Resolve),
            );
    }
}
