//! Status domain: health tuning.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatusTuning {
    pub max_health: i32,
    /// Seconds of damage immunity after a surviving hit.
    pub invulnerability_window: f32,
    /// Seconds between the death sequence and the level reset.
    pub respawn_delay: f32,
}

impl Default for StatusTuning {
    fn default() -> Self {
        Self {
            max_health: 100,
            invulnerability_window: 0.5,
            respawn_delay: 1.0,
        }
    }
}
