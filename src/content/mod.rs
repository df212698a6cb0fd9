//! Content domain: RON-backed tuning and its loader.

mod data;
mod loader;
mod validation;


pub use data::{
    AvoidanceTuning, BigfootTuning, BoltTuning, EvadeTuning, FlightTuning, GameplayTuning,
    KnockbackTuning, LeapTuning, LocomotionTuning, MinionTuning, MothmanTuning,
    PerceptionTuning, PersonalSpaceTuning, RoamTuning, RushTuning, ShriekTuning, SummonTuning,
    SwipeTuning, SwoopTuning, WendigoTuning,
};
pub use loader::{load_all_content, ContentLoadError};
pub use validation::validate;

use bevy::prelude::*;
use std::path::PathBuf;

/// All loaded tuning, one field per file under `assets/data/`.
#[derive(Resource, Debug, Clone, Default)]
pub struct BossContent {
    pub bigfoot: BigfootTuning,
    pub mothman: MothmanTuning,
    pub wendigo: WendigoTuning,
    pub gameplay: GameplayTuning,
}

/// Startup label so spawners can order themselves after the load.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentLoadSet;

pub struct ContentPlugin {
    pub base_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("assets/data"),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let base_path = self.base_path.clone();
        app.add_systems(
            Startup,
            (move |mut commands: Commands| load_content(&base_path, &mut commands))
                .in_set(ContentLoadSet),
        );
    }
}

pub(crate) fn load_content(base_path: &std::path::Path, commands: &mut Commands) {
    let (content, errors) = load_all_content(base_path);
    for error in &errors {
        warn!("{}, using defaults for that file", error);
    }
    for warning in validate(&content) {
        warn!("content validation: {}", warning);
    }
    info!(
        "content loaded from {} ({} file errors)",
        base_path.display(),
        errors.len()
    );
    commands.insert_resource(content);
}
