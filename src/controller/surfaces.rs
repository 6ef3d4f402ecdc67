//! Controller domain: surface classification and slope math.

use bevy::prelude::*;

use crate::controller::components::{GroundEffector, GroundKind, JumpPadForce, WallEffector, WallKind};

/// Classify a surface struck by a ground or ceiling cast.
///
/// Surfaces declare their semantics through effector components resolved at
/// level-load time; anything untagged is plain level geometry. Jump pads also
/// report their launch parameters.
pub(crate) fn classify_ground(
    entity: Entity,
    effectors: &Query<&GroundEffector>,
    pads: &Query<&JumpPadForce>,
) -> (GroundKind, Option<JumpPadForce>) {
    match effectors.get(entity) {
        Ok(effector) => {
            let pad = if effector.kind == GroundKind::JumpPad {
                pads.get(entity).ok().copied()
            } else {
                None
            };
            (effector.kind, pad)
        }
        Err(_) => (GroundKind::LevelGeometry, None),
    }
}

/// Rider linkage for the surface stood on this step.
///
/// Moving platforms link to the exact entity struck, so stepping from one
/// moving platform straight onto an adjacent one re-links immediately and
/// the rider never inherits the old platform's displacement. Any other
/// surface drops the linkage.
pub(crate) fn rider_linkage(kind: GroundKind, entity: Entity) -> Option<Entity> {
    match kind {
        GroundKind::MovingPlatform => Some(entity),
        _ => None,
    }
}

/// Classify a surface struck by a wall cast. Untagged walls are `Normal`.
pub(crate) fn classify_wall(entity: Entity, effectors: &Query<&WallEffector>) -> WallKind {
    match effectors.get(entity) {
        Ok(effector) => effector.kind,
        Err(_) => WallKind::Normal,
    }
}

/// Signed angle (degrees) between a surface normal and straight up.
///
/// A slope rising to the right reports a negative angle, matching the sign
/// convention the descent check in [`follows_slope`] relies on.
pub fn signed_slope_angle(normal: Vec2) -> f32 {
    normal.angle_to(Vec2::Y).to_degrees()
}

/// Whether a surface at `slope_angle` degrees can be stood on.
pub fn standable(slope_angle: f32, limit: f32) -> bool {
    slope_angle.abs() <= limit
}

/// Whether horizontal motion `dx` is descending the slope at `slope_angle`,
/// i.e. the direction signs align.
pub fn follows_slope(dx: f32, slope_angle: f32) -> bool {
    (dx > 0.0 && slope_angle > 0.0) || (dx < 0.0 && slope_angle < 0.0)
}

/// Vertical displacement pinning a descending character to the slope surface.
/// Always downward; scaled past the geometric tangent so discrete steps never
/// leave the body hovering above sloped ground.
pub fn slope_descent(dx: f32, slope_angle: f32, adjustment: f32) -> f32 {
    -(slope_angle.to_radians().tan() * dx).abs() * adjustment
}
