//! Controller domain: per-step contact detection.
//!
//! Four fixed shape casts per body per step: capsule down (ground), capsule
//! up (ceiling), box left and box right (walls). Each hit is classified
//! through the surface effectors; flags and the rider linkage are re-derived
//! from scratch every step.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::components::{
    capsule_extents, ContactState, GameLayer, GroundCheck, GroundEffector, JumpPadForce,
    WallEffector,
};
use crate::controller::resources::ControllerTuning;
use crate::controller::surfaces::{
    classify_ground, classify_wall, rider_linkage, signed_slope_angle, standable,
};
use crate::controller::{GroundKind, WallKind};

/// Wall casts use a box slightly smaller than the body so they do not snag
/// on the floor the body is standing on.
const WALL_BOX_SCALE: f32 = 0.75;

pub(crate) fn refresh_contacts(
    spatial_query: SpatialQuery,
    tuning: Res<ControllerTuning>,
    time: Res<Time>,
    ground_effectors: Query<&GroundEffector>,
    wall_effectors: Query<&WallEffector>,
    jump_pads: Query<&JumpPadForce>,
    mut bodies: Query<(
        Entity,
        &Transform,
        &Collider,
        &mut ContactState,
        &mut GroundCheck,
    )>,
) {
    let dt = time.delta_secs();

    for (entity, transform, collider, mut contacts, mut ground_check) in &mut bodies {
        let was_airborne = !contacts.below;
        let origin = transform.translation.truncate();
        let Some(extents) = capsule_extents(collider) else {
            error!("body {entity:?} has a non-capsule collider; skipping contact update");
            continue;
        };

        // Ground-check re-enabling is the window expiry itself; ticking an
        // idle window is a no-op, so repeated disables stay last-write-wins.
        ground_check.lock.tick(dt);

        let ground_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::OneWay])
            .with_excluded_entities([entity]);
        let wall_filter =
            SpatialQueryFilter::from_mask(GameLayer::Wall).with_excluded_entities([entity]);

        // Ground: downward capsule cast, unless suppressed by a jump window.
        if ground_check.suppressed() {
            contacts.clear_ground();
        } else {
            match spatial_query.cast_shape(
                collider,
                origin,
                0.0,
                Dir2::NEG_Y,
                &ShapeCastConfig::from_max_distance(tuning.raycast_distance),
                &ground_filter,
            ) {
                Some(hit) => {
                    let angle = signed_slope_angle(hit.normal1);
                    if standable(angle, tuning.slope_angle_limit) {
                        contacts.below = true;
                        contacts.slope_angle = angle;
                        contacts.ground_entity = Some(hit.entity);
                        let (kind, pad) =
                            classify_ground(hit.entity, &ground_effectors, &jump_pads);
                        contacts.ground = kind;
                        contacts.jump_pad = pad;
                        // Rider linkage follows the platform actually
                        // stood on, re-linking when it changes underfoot.
                        contacts.platform = rider_linkage(kind, hit.entity);
                    } else {
                        // A collider was struck, but too steep to stand on.
                        contacts.clear_ground();
                        contacts.slope_angle = angle;
                    }
                }
                None => contacts.clear_ground(),
            }
        }

        // Ceiling: upward capsule cast. One-way platforms are included so
        // the ability layer can tell a passable ceiling from a solid one.
        match spatial_query.cast_shape(
            collider,
            origin,
            0.0,
            Dir2::Y,
            &ShapeCastConfig::from_max_distance(tuning.raycast_distance),
            &ground_filter,
        ) {
            Some(hit) => {
                contacts.above = true;
                contacts.ceiling_entity = Some(hit.entity);
                let (kind, _) = classify_ground(hit.entity, &ground_effectors, &jump_pads);
                contacts.ceiling = kind;
            }
            None => {
                contacts.above = false;
                contacts.ceiling = GroundKind::None;
                contacts.ceiling_entity = None;
            }
        }

        // Walls: box casts to either side.
        let wall_box = Collider::rectangle(
            extents.x * 2.0 * WALL_BOX_SCALE,
            extents.y * 2.0 * WALL_BOX_SCALE,
        );

        let left_hit = spatial_query.cast_shape(
            &wall_box,
            origin,
            0.0,
            Dir2::NEG_X,
            &ShapeCastConfig::from_max_distance(tuning.raycast_distance),
            &wall_filter,
        );
        contacts.left = left_hit.is_some();
        contacts.left_wall = match left_hit {
            Some(hit) => classify_wall(hit.entity, &wall_effectors),
            None => WallKind::None,
        };

        let right_hit = spatial_query.cast_shape(
            &wall_box,
            origin,
            0.0,
            Dir2::X,
            &ShapeCastConfig::from_max_distance(tuning.raycast_distance),
            &wall_filter,
        );
        contacts.right = right_hit.is_some();
        contacts.right_wall = match right_hit {
            Some(hit) => classify_wall(hit.entity, &wall_effectors),
            None => WallKind::None,
        };

        // One-step edge trigger: consumed by the ability layer to snapshot
        // impact velocity for jump pads.
        contacts.hit_ground_this_frame = contacts.below && was_airborne;
        if contacts.hit_ground_this_frame {
            debug!("landed on {:?} (slope {:.1} deg)", contacts.ground, contacts.slope_angle);
        }
    }
}
