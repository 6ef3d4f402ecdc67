//! Platforms domain: waypoint platforms, collapse state, and pass-through windows.

use bevy::prelude::*;

use crate::core::OneShot;

/// Distance at which a platform counts as having arrived at its waypoint.
pub(crate) const ARRIVAL_EPSILON: f32 = 2.4;

/// A platform cycling through an ordered, non-empty waypoint loop at
/// constant speed. The loop never terminates; the target index always stays
/// in range and wraps to 0 past the last waypoint.
#[derive(Component, Debug)]
pub struct MovingPlatform {
    pub waypoints: Vec<Vec2>,
    pub speed: f32,
    pub target: usize,
}

impl MovingPlatform {
    /// Returns `None` for an empty waypoint list, which is a level
    /// configuration error the caller reports at spawn time.
    pub fn new(waypoints: Vec<Vec2>, speed: f32) -> Option<Self> {
        if waypoints.is_empty() {
            return None;
        }
        Some(Self {
            waypoints,
            speed,
            target: 0,
        })
    }
}

/// Per-step displacement of a platform: this-step position minus last-step
/// position. Produced once per step before any rider reads it.
#[derive(Component, Debug, Default)]
pub struct PlatformMotion {
    pub delta: Vec2,
}

/// Marker for platforms that block only from above. Lives on the one-way
/// physics layer so upward motion ignores it while ground casts include it.
#[derive(Component, Debug)]
pub struct OneWayPlatform;

/// A platform that gives way shortly after something stands on it.
#[derive(Component, Debug)]
pub struct CollapsiblePlatform {
    /// Seconds of standing contact before the platform gives way.
    pub delay: f32,
}

/// Collapse countdown, inserted on first grounded contact.
#[derive(Component, Debug, Default)]
pub(crate) struct Collapsing {
    pub(crate) timer: OneShot,
}

/// A collapsed platform dropping out of the level.
#[derive(Component, Debug)]
pub(crate) struct Falling;

/// Pass-through window: the platform's collider is disabled until the
/// window elapses. Re-triggering restarts the window in place.
#[derive(Component, Debug, Default)]
pub(crate) struct PassThrough {
    pub(crate) timer: OneShot,
}

/// Advance a position one step along a waypoint loop.
///
/// Moves toward the target waypoint by at most `step`, then advances the
/// target (wrapping to 0) once within [`ARRIVAL_EPSILON`] of it.
pub(crate) fn advance_along_loop(
    position: Vec2,
    waypoints: &[Vec2],
    target: usize,
    step: f32,
) -> (Vec2, usize) {
    let destination = waypoints[target];
    let next = position.move_towards(destination, step);
    if next.distance(destination) < ARRIVAL_EPSILON {
        (next, (target + 1) % waypoints.len())
    } else {
        (next, target)
    }
}
