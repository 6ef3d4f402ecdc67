//! Content domain: shape of the tuning file.

use serde::Deserialize;

use crate::controller::ControllerTuning;
use crate::platforms::PlatformTuning;
use crate::player::MovementTuning;
use crate::status::StatusTuning;

/// Everything `assets/data/tuning.ron` may override. Each section is
/// optional; missing sections keep their in-code defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TuningFile {
    pub controller: ControllerTuning,
    pub movement: MovementTuning,
    pub platforms: PlatformTuning,
    pub status: StatusTuning,
}
