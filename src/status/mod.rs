//! Status domain: health/damage bookkeeping and the death/respawn sequence.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{ContactDamage, Dead, Health, HealthChange, Invulnerable};
pub use events::AdjustHealthEvent;
pub use resources::StatusTuning;

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::status::systems::{apply_health, contact_damage, tick_invulnerability, tick_respawn};

pub struct StatusPlugin;

impl Plugin for StatusPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StatusTuning>()
            .add_message::<AdjustHealthEvent>()
            .add_systems(
                FixedUpdate,
                (
                    contact_damage,
                    apply_health,
                    tick_invulnerability,
                    tick_respawn,
                )
                    .chain()
                    .in_set(SimulationSet::Status),
            );
    }
}
