//! Content domain: data-driven tuning loaded from RON at startup.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::TuningFile;
pub use loader::{load_tuning, TuningLoadError};

use bevy::prelude::*;
use std::path::Path;

use crate::controller::ControllerTuning;
use crate::platforms::PlatformTuning;
use crate::player::MovementTuning;
use crate::status::StatusTuning;

const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, apply_tuning_file);
    }
}

/// Overwrite the default tuning resources with whatever the tuning file
/// provides. Load failures are reported once and the defaults stand.
pub(crate) fn apply_tuning_file(
    mut controller: ResMut<ControllerTuning>,
    mut movement: ResMut<MovementTuning>,
    mut platforms: ResMut<PlatformTuning>,
    mut status: ResMut<StatusTuning>,
) {
    match load_tuning(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            *controller = tuning.controller;
            *movement = tuning.movement;
            *platforms = tuning.platforms;
            *status = tuning.status;
            info!("Loaded tuning from {}", TUNING_PATH);
        }
        Err(error) => {
            warn!("{}; using built-in tuning defaults", error);
        }
    }
}
