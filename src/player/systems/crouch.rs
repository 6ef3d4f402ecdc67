//! Player domain: crouch posture handling.
//!
//! Crouching halves the capsule and drops the body by a quarter of its
//! standing height; standing restores both, but only once an upward probe
//! confirms there is no ceiling immediately above.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{ContactState, GameLayer};
use crate::player::components::{AbilityState, CapsuleProfile, Player, PlayerMotion};
use crate::player::resources::PlayerInput;
use crate::status::Dead;

/// Extra headroom the standing probe requires beyond the restored capsule.
const CLEARANCE: f32 = 1.0;

pub(crate) fn update_crouch(
    spatial_query: SpatialQuery,
    input: Res<PlayerInput>,
    mut query: Query<
        (
            Entity,
            &CapsuleProfile,
            &ContactState,
            &PlayerMotion,
            &mut AbilityState,
            &mut Collider,
            &mut Transform,
        ),
        (With<Player>, Without<Dead>),
    >,
) {
    for (entity, profile, contacts, motion, mut state, mut collider, mut transform) in &mut query {
        let wants_crouch = input.axis.y < -0.5 && contacts.below;

        if wants_crouch && !state.is_crouching {
            *collider = Collider::capsule(profile.radius, profile.crouched_length());
            transform.translation.y -= profile.crouch_offset();
            state.is_crouching = true;
            debug!("crouched");
        } else if !wants_crouch && state.is_crouching {
            // Stand back up only with confirmed clearance, otherwise stay
            // crouched and retry next step.
            let standing = Collider::capsule(profile.radius, profile.length);
            let standing_center =
                transform.translation.truncate() + Vec2::new(0.0, profile.crouch_offset());
            let filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall])
                .with_excluded_entities([entity]);
            let blocked = spatial_query
                .cast_shape(
                    &standing,
                    standing_center,
                    0.0,
                    Dir2::Y,
                    &ShapeCastConfig::from_max_distance(CLEARANCE),
                    &filter,
                )
                .is_some();

            if !blocked {
                *collider = standing;
                transform.translation.y += profile.crouch_offset();
                state.is_crouching = false;
                debug!("stood up");
            }
        }

        state.is_moving_crouched = state.is_crouching && motion.velocity.x.abs() > f32::EPSILON;
    }
}
