//! Platforms domain: pass-through and collapse tuning.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlatformTuning {
    /// Seconds a one-way platform stays passable after a pass-through trigger.
    pub pass_through_window: f32,
    /// Seconds a collapsible platform holds after first contact.
    pub collapse_delay: f32,
}

impl Default for PlatformTuning {
    fn default() -> Self {
        Self {
            pass_through_window: 0.75,
            collapse_delay: 0.5,
        }
    }
}
