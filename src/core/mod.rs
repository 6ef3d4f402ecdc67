//! Core domain: fixed-step schedule phases, run-flow events, and camera setup.

mod events;
mod timing;

#[cfg(test)]
mod tests;

pub use events::LevelResetEvent;
pub use timing::OneShot;

use bevy::prelude::*;

/// Phases of one simulation step, chained in `FixedUpdate`.
///
/// Platforms publish their per-step displacement before any character reads
/// it, so the platform/rider ordering dependency is explicit rather than an
/// accident of system registration order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Advance platforms and their collision windows.
    Platforms,
    /// Ability state machine turns input + last step's contacts into motion.
    Intent,
    /// Kinematic controller applies the accumulated displacement.
    Integrate,
    /// Contact flags are re-derived from fresh shape casts.
    Contacts,
    /// Health, damage, and respawn bookkeeping.
    Status,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(60.0))
            .add_message::<LevelResetEvent>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Platforms,
                    SimulationSet::Intent,
                    SimulationSet::Integrate,
                    SimulationSet::Contacts,
                    SimulationSet::Status,
                )
                    .chain(),
            )
            .add_systems(Startup, setup_camera);
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
