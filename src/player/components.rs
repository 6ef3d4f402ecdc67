//! Player domain: ability state, capsule profile, and motion components.

use bevy::prelude::*;

use crate::core::OneShot;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Which abilities this character has unlocked.
#[derive(Component, Debug, Clone)]
pub struct PlayerAbilities {
    pub can_double_jump: bool,
    pub can_wall_jump: bool,
    /// A wall jump re-grants the double jump when set.
    pub can_double_jump_after_wall_jump: bool,
}

impl Default for PlayerAbilities {
    fn default() -> Self {
        Self {
            can_double_jump: true,
            can_wall_jump: true,
            can_double_jump_after_wall_jump: true,
        }
    }
}

/// Per-step ability flags. The airborne flags are cleared together whenever
/// the character becomes grounded; `is_crouching` only clears once an upward
/// clearance probe passes.
#[derive(Component, Debug, Default)]
pub struct AbilityState {
    pub is_jumping: bool,
    pub is_double_jumping: bool,
    pub is_wall_jumping: bool,
    pub is_crouching: bool,
    pub is_moving_crouched: bool,
    pub facing: Facing,
}

impl AbilityState {
    /// Grounding clears every airborne ability flag at once.
    pub(crate) fn clear_air_flags(&mut self) {
        self.is_jumping = false;
        self.is_double_jumping = false;
        self.is_wall_jumping = false;
    }
}

/// Velocity integrated by the ability layer, plus the jump-pad bookkeeping
/// snapshotted around the landing edge trigger.
#[derive(Component, Debug, Default)]
pub struct PlayerMotion {
    pub velocity: Vec2,
    /// Downward impact speed captured on the step the character landed.
    pub landing_speed: f32,
    /// Escalating launch bonus accrued while jump stays held on a pad.
    pub pad_bonus: f32,
}

/// Horizontal input lock after a wall jump.
#[derive(Component, Debug, Default)]
pub struct WallJumpLock {
    pub(crate) timer: OneShot,
}

/// Standing capsule dimensions, kept so crouching can halve the collider
/// and standing can restore it exactly.
#[derive(Component, Debug, Clone, Copy)]
pub struct CapsuleProfile {
    pub radius: f32,
    /// Length of the straight segment between the capsule's end caps.
    pub length: f32,
}

impl CapsuleProfile {
    /// Full standing height.
    pub fn height(&self) -> f32 {
        2.0 * self.radius + self.length
    }

    /// Segment length of the crouched capsule: half the standing height,
    /// floored at a ball when the radius alone exceeds it.
    pub fn crouched_length(&self) -> f32 {
        (self.length / 2.0 - self.radius).max(0.0)
    }

    /// How far the body shifts down when crouching (and back up on standing):
    /// a quarter of the standing height.
    pub fn crouch_offset(&self) -> f32 {
        self.height() / 4.0
    }
}
