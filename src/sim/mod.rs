//! Sim domain: fixed-tick schedule phases, physics layers, seeded RNG, and the
//! arena itself.

use std::time::Duration;

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Simulation tick rate. Every gameplay system runs on this clock.
pub const TICK_RATE_HZ: f64 = 64.0;

/// One tick, expressed so that a manual time step advances exactly one
/// `FixedUpdate` per `App::update`.
pub const TICK_INTERVAL: Duration = Duration::from_micros(15_625);

/// Phases of a simulation tick. Later phases observe the writes of earlier
/// ones within the same tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Cooldowns, status timers, lifetimes.
    Timers,
    /// State machines pick what to do this tick.
    Decide,
    /// Steering, attack routines, locomotion write velocities and spawn things.
    Act,
    /// Damage, knockback, status application, deaths.
    Resolve,
}

#[derive(PhysicsLayer, Default, Clone, Copy, Debug)]
pub enum GameLayer {
    #[default]
    Ground,
    Obstacle,
    Boss,
    Hunter,
    Minion,
    Projectile,
}

/// Deterministic RNG for every gameplay roll. Seeded once at startup so runs
/// replay identically.
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl SimRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

#[derive(Component)]
pub struct ArenaGround;

#[derive(Component)]
pub struct ArenaObstacle;

pub struct SimPlugin {
    pub seed: u64,
}

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SimRng::from_seed(self.seed))
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .insert_resource(TimeUpdateStrategy::ManualDuration(TICK_INTERVAL))
            .configure_sets(
                FixedUpdate,
                (SimSet::Timers, SimSet::Decide, SimSet::Act, SimSet::Resolve).chain(),
            )
            .add_systems(Startup, spawn_arena);
    }
}

/// Flat slab plus a few pillars for the avoidance whiskers to work against.
pub(crate) fn spawn_arena(mut commands: Commands) {
    commands.spawn((
        ArenaGround,
        RigidBody::Static,
        Collider::cuboid(120.0, 1.0, 120.0),
        CollisionLayers::new(GameLayer::Ground, LayerMask::ALL),
        Friction::new(0.8),
        Transform::from_xyz(0.0, -0.5, 0.0),
    ));

    for (x, z) in [(8.0, 6.0), (-10.0, -4.0), (5.0, -12.0), (-6.0, 11.0)] {
        commands.spawn((
            ArenaObstacle,
            RigidBody::Static,
            Collider::cuboid(1.5, 4.0, 1.5),
            CollisionLayers::new(GameLayer::Obstacle, LayerMask::ALL),
            Transform::from_xyz(x, 2.0, z),
        ));
    }

    debug!("arena spawned");
}

/// Build a headless app with physics and every gameplay plugin installed.
/// `main` and the integration tests both start from this.
pub fn headless_app(seed: u64) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(TransformPlugin)
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            SimPlugin { seed },
            crate::content::ContentPlugin::default(),
            crate::combat::CombatPlugin,
            crate::hunter::HunterPlugin,
            crate::boss::BossPlugin,
        ));
    // `App::update` never runs `Plugin::finish`/`cleanup`; avian registers its
    // diagnostics resources there, so complete plugin setup before stepping.
    app.finish();
    app.cleanup();
    app
}
