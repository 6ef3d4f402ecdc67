//! Player domain: ability state machine plugin wiring and exports.

mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    AbilityState, CapsuleProfile, Facing, Player, PlayerAbilities, PlayerMotion, WallJumpLock,
};
pub use resources::{MovementTuning, PlayerInput};
pub use systems::abilities::{jump_pad_launch, wall_jump_velocity};

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::player::systems::{drive_movement, latch_input, update_crouch};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<PlayerInput>()
            .add_systems(Update, latch_input)
            .add_systems(
                FixedUpdate,
                // Crouch posture resolves first so a same-step down+jump
                // press already reads as crouched and drops through a
                // one-way platform instead of jumping.
                (update_crouch, drive_movement)
                    .chain()
                    .in_set(SimulationSet::Intent),
            );
    }
}
