//! Player domain: movement tuning and latched input.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub walk_speed: f32,
    pub gravity: f32,
    pub jump_speed: f32,
    pub double_jump_speed: f32,
    pub x_wall_jump_speed: f32,
    pub y_wall_jump_speed: f32,
    /// Seconds of horizontal input lock after a wall jump.
    pub wall_jump_lock_time: f32,
    /// Fraction of impact speed a jump pad returns on hard landings.
    pub jump_pad_scale: f32,
    /// Launch bonus added per pad bounce while jump stays held.
    pub pad_held_bonus: f32,
    /// Fall speed cap while sliding down a sticky wall.
    pub sticky_slide_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 240.0,
            gravity: 480.0,
            jump_speed: 360.0,
            double_jump_speed: 360.0,
            x_wall_jump_speed: 360.0,
            y_wall_jump_speed: 360.0,
            wall_jump_lock_time: 0.4,
            jump_pad_scale: 0.92,
            pad_held_bonus: 12.0,
            sticky_slide_speed: 60.0,
        }
    }
}

/// Input latched in `Update` and consumed once per simulation step, so a
/// single physical press yields exactly one started and one canceled edge
/// no matter how many steps elapse while held.
#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    pub axis: Vec2,
    pub jump_started: bool,
    pub jump_canceled: bool,
    pub jump_held: bool,
}
