//! Controller domain: per-step displacement integration.
//!
//! Consumes the accumulated `move_amount`, applies slope pinning and platform
//! carry, resolves the result against solid geometry with shape casts, and
//! writes the body position once.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::components::{ContactState, GameLayer, GroundCheck, KinematicBody};
use crate::controller::resources::ControllerTuning;
use crate::controller::surfaces::{follows_slope, signed_slope_angle, slope_descent, standable};
use crate::controller::GroundKind;
use crate::platforms::PlatformMotion;

/// Gap preserved between the capsule and any surface it rests against.
const SKIN: f32 = 0.05;

pub(crate) fn apply_motion(
    spatial_query: SpatialQuery,
    tuning: Res<ControllerTuning>,
    platforms: Query<&PlatformMotion>,
    mut bodies: Query<(
        Entity,
        &Collider,
        &mut Transform,
        &mut KinematicBody,
        &ContactState,
        &GroundCheck,
    )>,
) {
    for (entity, collider, mut transform, mut body, contacts, ground_check) in &mut bodies {
        let mut total = body.move_amount;
        body.move_amount = Vec2::ZERO;

        // Slope pinning: a grounded character moving down-slope has its
        // vertical displacement replaced, otherwise discrete steps separate
        // it from the surface and it stutters airborne.
        if contacts.below
            && contacts.slope_angle != 0.0
            && follows_slope(total.x, contacts.slope_angle)
        {
            total.y = slope_descent(total.x, contacts.slope_angle, tuning.down_force_adjustment);
        }

        // Platform carry: riders inherit their platform's displacement. A
        // descending platform also drags the rider down (scaled), because
        // gravity alone cannot keep pace with it within one step.
        if contacts.ground == GroundKind::MovingPlatform {
            if let Some(delta) = contacts.platform.and_then(|p| platforms.get(p).ok()) {
                total.x += delta.delta.x;
                if delta.delta.y < 0.0 {
                    total.y += delta.delta.y * tuning.down_force_adjustment;
                }
            }
        }

        let origin = transform.translation.truncate();
        let ground_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::OneWay])
            .with_excluded_entities([entity]);
        let solid_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall])
            .with_excluded_entities([entity]);

        // Horizontal resolution. Walkable inclines redirect the blocked
        // remainder along their surface; everything else clamps.
        if total.x != 0.0 {
            let direction = if total.x > 0.0 { Dir2::X } else { Dir2::NEG_X };
            if let Some(hit) = spatial_query.cast_shape(
                collider,
                origin,
                0.0,
                direction,
                &ShapeCastConfig::from_max_distance(total.x.abs() + SKIN),
                &solid_filter,
            ) {
                let angle = signed_slope_angle(hit.normal1);
                let allowed = (hit.distance - SKIN).max(0.0);
                if hit.distance < total.x.abs() {
                    let sign = total.x.signum();
                    let leftover = total.x.abs() - allowed;
                    total.x = sign * allowed;
                    if contacts.below && standable(angle, tuning.slope_angle_limit) {
                        total +=
                            Vec2::new(sign * leftover, 0.0).reject_from_normalized(hit.normal1);
                    }
                }
            }
        }

        // Downward resolution: land exactly on the surface. Surfaces steeper
        // than the slope limit are still solid, but the undone motion slides
        // along them instead of stopping.
        if total.y < 0.0 && !ground_check.suppressed() {
            if let Some(hit) = spatial_query.cast_shape(
                collider,
                origin,
                0.0,
                Dir2::NEG_Y,
                &ShapeCastConfig::from_max_distance(-total.y + SKIN),
                &ground_filter,
            ) {
                if hit.distance < -total.y {
                    let leftover = -total.y - hit.distance;
                    total.y = -(hit.distance - SKIN).max(0.0);
                    let angle = signed_slope_angle(hit.normal1);
                    if !standable(angle, tuning.slope_angle_limit) {
                        total += Vec2::new(0.0, -leftover).reject_from_normalized(hit.normal1);
                    }
                }
            }
        }

        // Upward resolution: ceilings stop the head. One-way platforms are
        // excluded here, so a body can rise through them from below.
        if total.y > 0.0 {
            if let Some(hit) = spatial_query.cast_shape(
                collider,
                origin,
                0.0,
                Dir2::Y,
                &ShapeCastConfig::from_max_distance(total.y + SKIN),
                &solid_filter,
            ) {
                if hit.distance < total.y {
                    total.y = (hit.distance - SKIN).max(0.0);
                }
            }
        }

        // Single position write per step.
        transform.translation += total.extend(0.0);
    }
}
