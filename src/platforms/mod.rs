//! Platforms domain: moving, one-way, and collapsible platform simulation.

mod components;
mod events;
mod resources;
mod systems;


pub use components::{CollapsiblePlatform, MovingPlatform, OneWayPlatform, PlatformMotion};
pub use events::PassThroughEvent;
pub use resources::PlatformTuning;

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::platforms::systems::{
    advance_platforms, close_pass_through_windows, open_pass_through_windows, settle_collapse,
    trigger_collapse,
};

pub struct PlatformsPlugin;

impl Plugin for PlatformsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlatformTuning>()
            .add_message::<PassThroughEvent>()
            .add_systems(
                FixedUpdate,
                (
                    advance_platforms,
                    open_pass_through_windows,
                    close_pass_through_windows,
                    trigger_collapse,
                    settle_collapse,
                )
                    .chain()
                    .in_set(SimulationSet::Platforms),
            );
    }
}
