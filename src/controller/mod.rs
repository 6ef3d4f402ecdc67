//! Controller domain: kinematic character controller plugin wiring and exports.
//!
//! Owns the per-step body update: callers accumulate displacement through
//! [`KinematicBody::move_by`], the controller applies slope and platform
//! corrections, resolves the motion against level geometry, and re-derives
//! [`ContactState`] from four shape casts once per simulation step.

mod components;
mod resources;
mod surfaces;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    ContactState, GameLayer, GroundCheck, GroundEffector, GroundKind, JumpPadForce, KinematicBody,
    WallEffector, WallKind,
};
pub use resources::ControllerTuning;
pub use surfaces::{follows_slope, signed_slope_angle, slope_descent, standable};

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::controller::systems::{apply_motion, refresh_contacts};

pub struct ControllerPlugin;

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerTuning>()
            .add_systems(FixedUpdate, apply_motion.in_set(SimulationSet::Integrate))
            .add_systems(FixedUpdate, refresh_contacts.in_set(SimulationSet::Contacts));
    }
}
