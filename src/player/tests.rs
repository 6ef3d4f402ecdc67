//! Player domain: tests for jump pads, wall jumps, crouch math, and state flags.

use bevy::prelude::Vec2;

use super::components::{AbilityState, CapsuleProfile, Facing};
use super::{jump_pad_launch, wall_jump_velocity};

// -----------------------------------------------------------------------------
// Jump pad tests
// -----------------------------------------------------------------------------

#[test]
fn test_soft_landing_launches_at_pad_amount() {
    // Impact at or below the pad amount returns the flat amount.
    assert_eq!(jump_pad_launch(0.0, 360.0, 720.0, 0.0, 0.92), 360.0);
    assert_eq!(jump_pad_launch(360.0, 360.0, 720.0, 0.0, 0.92), 360.0);
}

#[test]
fn test_hard_landing_launches_scaled() {
    let launch = jump_pad_launch(500.0, 360.0, 720.0, 0.0, 0.92);
    assert!((launch - 460.0).abs() < 1e-4);
}

#[test]
fn test_launch_clamped_to_upper_limit() {
    assert_eq!(jump_pad_launch(1000.0, 360.0, 720.0, 0.0, 0.92), 720.0);
    // The held bonus cannot push past the limit either.
    assert_eq!(jump_pad_launch(360.0, 360.0, 720.0, 900.0, 0.92), 720.0);
}

#[test]
fn test_held_bonus_rides_on_top_of_base() {
    let launch = jump_pad_launch(0.0, 360.0, 720.0, 24.0, 0.92);
    assert_eq!(launch, 384.0);
}

// -----------------------------------------------------------------------------
// Wall jump tests
// -----------------------------------------------------------------------------

#[test]
fn test_wall_jump_pushes_away_from_wall() {
    let speed = Vec2::new(360.0, 360.0);

    let (velocity, facing) = wall_jump_velocity(true, speed);
    assert!(velocity.x > 0.0, "left wall sends the player right");
    assert!(velocity.y > 0.0);
    assert_eq!(facing, Facing::Right);

    let (velocity, facing) = wall_jump_velocity(false, speed);
    assert!(velocity.x < 0.0, "right wall sends the player left");
    assert!(velocity.y > 0.0);
    assert_eq!(facing, Facing::Left);
}

// -----------------------------------------------------------------------------
// Ability flag tests
// -----------------------------------------------------------------------------

#[test]
fn test_grounding_clears_airborne_flags_together() {
    let mut state = AbilityState {
        is_jumping: true,
        is_double_jumping: true,
        is_wall_jumping: true,
        is_crouching: true,
        ..Default::default()
    };

    state.clear_air_flags();
    assert!(!state.is_jumping);
    assert!(!state.is_double_jumping);
    assert!(!state.is_wall_jumping);
    // Crouch is not an airborne flag; it survives grounding.
    assert!(state.is_crouching);
}

// -----------------------------------------------------------------------------
// Crouch capsule tests
// -----------------------------------------------------------------------------

#[test]
fn test_crouch_halves_the_capsule() {
    let profile = CapsuleProfile {
        radius: 12.0,
        length: 24.0,
    };
    assert_eq!(profile.height(), 48.0);

    let crouched_height = 2.0 * profile.radius + profile.crouched_length();
    assert_eq!(crouched_height, 24.0);
    assert_eq!(profile.crouch_offset(), 12.0);
}

#[test]
fn test_crouch_stand_cycle_is_idempotent() {
    let profile = CapsuleProfile {
        radius: 12.0,
        length: 24.0,
    };

    // crouch -> stand -> crouch returns to the same size and a net-zero
    // position offset.
    let mut y = 100.0;
    y -= profile.crouch_offset();
    y += profile.crouch_offset();
    assert_eq!(y, 100.0);

    let restored = CapsuleProfile {
        radius: profile.radius,
        length: profile.length,
    };
    assert_eq!(restored.height(), profile.height());
}

#[test]
fn test_squat_capsule_floors_at_a_ball() {
    // A capsule whose radius dominates cannot halve below a ball.
    let profile = CapsuleProfile {
        radius: 16.0,
        length: 8.0,
    };
    assert_eq!(profile.crouched_length(), 0.0);
}
