//! Controller domain: shape-cast and slope tuning.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControllerTuning {
    /// Max distance for the four per-step contact casts, in world units.
    pub raycast_distance: f32,
    /// Steepest standable surface, in degrees. Steeper hits leave the
    /// character airborne and sliding.
    pub slope_angle_limit: f32,
    /// Scale on downward corrections (slope pinning, descending-platform
    /// carry) so discrete steps cannot separate the body from the surface.
    pub down_force_adjustment: f32,
    /// How long a jump suppresses the ground cast, in seconds.
    pub ground_check_window: f32,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            raycast_distance: 4.0,
            slope_angle_limit: 50.0,
            down_force_adjustment: 1.2,
            ground_check_window: 0.1,
        }
    }
}
