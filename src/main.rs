//! Headless arena demo: one hunter, three cryptids, ninety simulated seconds.

mod boss;
mod combat;
mod content;
mod hunter;
mod sim;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::boss::{BossAgent, BossKind};
use crate::combat::Health;
use crate::content::{BossContent, ContentLoadSet};
use crate::hunter::Hunter;

const DEMO_SECONDS: u64 = 90;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(7);

    let mut app = sim::headless_app(seed);
    app.add_plugins(LogPlugin::default())
        .add_systems(Startup, spawn_encounter.after(ContentLoadSet))
        .add_systems(FixedUpdate, log_encounter.in_set(sim::SimSet::Resolve));

    info!("running {}s at {}Hz, seed {}", DEMO_SECONDS, sim::TICK_RATE_HZ, seed);
    for _ in 0..(DEMO_SECONDS * sim::TICK_RATE_HZ as u64) {
        app.update();
    }
}

fn spawn_encounter(mut commands: Commands, content: Res<BossContent>) {
    hunter::spawn_hunter(&mut commands, &content.gameplay, Vec3::new(0.0, 1.0, 0.0));
    boss::spawn_bigfoot(&mut commands, &content, Vec3::new(14.0, 1.4, 0.0));
    boss::spawn_mothman(&mut commands, &content, Vec3::new(-10.0, 6.0, 8.0));
    boss::spawn_wendigo(&mut commands, &content, Vec3::new(0.0, 1.2, -16.0));
}

/// Periodic one-line status so a demo run shows the fight unfolding.
fn log_encounter(
    mut ticks: Local<u32>,
    bosses: Query<(&BossKind, &BossAgent, &Health)>,
    hunters: Query<&Health, With<Hunter>>,
) {
    *ticks += 1;
    if *ticks % 320 != 0 {
        return;
    }

    let hunter = hunters
        .iter()
        .next()
        .map(|h| format!("{:.0}/{:.0}", h.current, h.max))
        .unwrap_or_else(|| "down".to_string());
    info!("t={:>4} hunter {}", *ticks, hunter);
    for (kind, agent, health) in &bosses {
        info!(
            "  {:?}: {:?} {:.0}/{:.0}",
            kind, agent.state, health.current, health.max
        );
    }
}
