//! Controller domain: tests for slope math, surface kinds, and contact state.

use avian2d::prelude::Collider;
use bevy::prelude::{Entity, Vec2};

use super::components::{capsule_extents, ContactState};
use super::surfaces::{follows_slope, rider_linkage, signed_slope_angle, slope_descent, standable};
use super::{GroundCheck, GroundKind, KinematicBody, WallKind};

const DT: f32 = 1.0 / 60.0;

// -----------------------------------------------------------------------------
// Slope angle tests
// -----------------------------------------------------------------------------

#[test]
fn test_flat_ground_has_zero_slope() {
    assert!(signed_slope_angle(Vec2::Y).abs() < 1e-4);
}

#[test]
fn test_slope_angle_sign_convention() {
    // A 30-degree slope rising to the right tilts its normal to the left,
    // which reports as a negative angle.
    let rising_right = Vec2::new(-0.5, 3.0_f32.sqrt() / 2.0);
    let angle = signed_slope_angle(rising_right);
    assert!((angle + 30.0).abs() < 1e-3, "got {angle}");

    let rising_left = Vec2::new(0.5, 3.0_f32.sqrt() / 2.0);
    let angle = signed_slope_angle(rising_left);
    assert!((angle - 30.0).abs() < 1e-3, "got {angle}");
}

#[test]
fn test_standable_within_limit() {
    for angle in [-50.0, -30.0, 0.0, 30.0, 50.0] {
        assert!(standable(angle, 50.0), "angle {angle} should be standable");
    }
}

#[test]
fn test_steep_surfaces_are_not_standable() {
    for angle in [-90.0, -50.1, 50.1, 75.0, 90.0] {
        assert!(!standable(angle, 50.0), "angle {angle} should not be standable");
    }
}

// -----------------------------------------------------------------------------
// Slope descent tests
// -----------------------------------------------------------------------------

#[test]
fn test_follows_slope_requires_sign_alignment() {
    // Descending: motion sign matches slope sign.
    assert!(follows_slope(1.0, 30.0));
    assert!(follows_slope(-1.0, -30.0));
    // Ascending or idle: no pinning.
    assert!(!follows_slope(1.0, -30.0));
    assert!(!follows_slope(-1.0, 30.0));
    assert!(!follows_slope(0.0, 30.0));
    assert!(!follows_slope(1.0, 0.0));
}

#[test]
fn test_slope_descent_magnitude_and_sign() {
    for angle in [-45.0_f32, -20.0, 20.0, 45.0] {
        for dx in [-4.0_f32, -1.0, 1.0, 4.0] {
            let dy = slope_descent(dx, angle, 1.2);
            let expected = -(angle.to_radians().tan() * dx).abs() * 1.2;
            assert!((dy - expected).abs() < 1e-5);
            // Pinning always pushes down toward the surface.
            assert!(dy <= 0.0);
        }
    }
}

#[test]
fn test_slope_descent_scales_with_adjustment() {
    let base = slope_descent(2.0, 30.0, 1.0);
    let adjusted = slope_descent(2.0, 30.0, 1.2);
    assert!((adjusted - base * 1.2).abs() < 1e-5);
}

// -----------------------------------------------------------------------------
// KinematicBody tests
// -----------------------------------------------------------------------------

#[test]
fn test_move_requests_accumulate() {
    let mut body = KinematicBody::default();
    body.move_by(Vec2::new(2.0, 0.0));
    body.move_by(Vec2::new(1.0, -3.0));
    assert_eq!(body.move_amount, Vec2::new(3.0, -3.0));
}

// -----------------------------------------------------------------------------
// Ground check suppression tests
// -----------------------------------------------------------------------------

#[test]
fn test_ground_check_suppression_window() {
    let mut check = GroundCheck::default();
    assert!(!check.suppressed());

    check.disable(3.0 * DT);
    assert!(check.suppressed());

    check.lock.tick(DT);
    check.lock.tick(DT);
    assert!(check.suppressed());
    check.lock.tick(DT);
    assert!(!check.suppressed());
}

#[test]
fn test_ground_check_redisable_restarts_window() {
    let mut check = GroundCheck::default();
    check.disable(2.0 * DT);
    check.lock.tick(DT);

    // A second jump mid-window re-arms it from scratch.
    check.disable(2.0 * DT);
    check.lock.tick(DT);
    assert!(check.suppressed());
    check.lock.tick(DT);
    assert!(!check.suppressed());
}

#[test]
fn test_suppressed_ground_clear_drops_rider_linkage() {
    let mut check = GroundCheck::default();
    let mut contacts = ContactState {
        below: true,
        ground: GroundKind::MovingPlatform,
        ..Default::default()
    };
    contacts.platform = Some(Entity::from_bits(42));

    // The jump window clears grounding without touching the window itself.
    check.disable(6.0 * DT);
    contacts.clear_ground();
    assert!(check.suppressed());
    assert!(!contacts.below);
    assert!(contacts.platform.is_none());
}

// -----------------------------------------------------------------------------
// Rider linkage tests
// -----------------------------------------------------------------------------

#[test]
fn test_rider_links_to_the_platform_stood_on() {
    let platform = Entity::from_bits(42);
    assert_eq!(
        rider_linkage(GroundKind::MovingPlatform, platform),
        Some(platform)
    );
}

#[test]
fn test_rider_relinks_when_stepping_between_platforms() {
    let first = Entity::from_bits(42);
    let second = Entity::from_bits(43);

    let mut contacts = ContactState {
        below: true,
        ground: GroundKind::MovingPlatform,
        ..Default::default()
    };
    contacts.platform = rider_linkage(GroundKind::MovingPlatform, first);
    assert_eq!(contacts.platform, Some(first));

    // Walking straight onto an adjacent moving platform must swap the
    // linkage, or the rider keeps inheriting the old platform's motion.
    contacts.platform = rider_linkage(GroundKind::MovingPlatform, second);
    assert_eq!(contacts.platform, Some(second));
}

#[test]
fn test_rider_linkage_drops_on_other_surfaces() {
    let entity = Entity::from_bits(42);
    assert_eq!(rider_linkage(GroundKind::LevelGeometry, entity), None);
    assert_eq!(rider_linkage(GroundKind::OneWayPlatform, entity), None);
    assert_eq!(rider_linkage(GroundKind::JumpPad, entity), None);
}

// -----------------------------------------------------------------------------
// Capsule extents tests
// -----------------------------------------------------------------------------

#[test]
fn test_capsule_extents_half_width_and_half_height() {
    let collider = Collider::capsule(12.0, 24.0);
    assert_eq!(capsule_extents(&collider), Some(Vec2::new(12.0, 24.0)));
}

#[test]
fn test_non_capsule_collider_has_no_extents() {
    let collider = Collider::rectangle(24.0, 48.0);
    assert_eq!(capsule_extents(&collider), None);
}

// -----------------------------------------------------------------------------
// ContactState tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_contact_state_is_airborne() {
    let contacts = ContactState::default();
    assert!(!contacts.below);
    assert!(!contacts.touching_wall());
    assert_eq!(contacts.ground, GroundKind::None);
    assert_eq!(contacts.left_wall, WallKind::None);
    assert!(contacts.platform.is_none());
}

#[test]
fn test_clearing_ground_drops_rider_linkage_and_pad() {
    let mut contacts = ContactState {
        below: true,
        ground: GroundKind::MovingPlatform,
        slope_angle: 12.0,
        ..Default::default()
    };
    contacts.platform = Some(bevy::prelude::Entity::from_bits(42));

    contacts.clear_ground();
    assert!(!contacts.below);
    assert_eq!(contacts.ground, GroundKind::None);
    assert_eq!(contacts.slope_angle, 0.0);
    assert!(contacts.platform.is_none());
    assert!(contacts.jump_pad.is_none());
}
