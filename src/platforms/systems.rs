//! Platforms domain: waypoint advancement, pass-through windows, collapse.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::controller::{ContactState, GroundKind};
use crate::platforms::components::{
    advance_along_loop, Collapsing, CollapsiblePlatform, Falling, MovingPlatform, PassThrough,
    PlatformMotion,
};
use crate::platforms::events::PassThroughEvent;
use crate::platforms::resources::PlatformTuning;

/// Downward drift of a collapsed platform, in units per second.
const COLLAPSE_FALL_SPEED: f32 = 240.0;

/// Height below which collapsed platforms are removed from the world.
const DESPAWN_FLOOR: f32 = -2000.0;

/// Move every platform toward its current waypoint and publish the per-step
/// displacement riders consume later in the same step.
pub(crate) fn advance_platforms(
    time: Res<Time>,
    mut platforms: Query<(&mut MovingPlatform, &mut Transform, &mut PlatformMotion), Without<Falling>>,
) {
    let dt = time.delta_secs();

    for (mut platform, mut transform, mut motion) in &mut platforms {
        let last = transform.translation.truncate();
        let (next, target) =
            advance_along_loop(last, &platform.waypoints, platform.target, platform.speed * dt);
        platform.target = target;
        transform.translation = next.extend(transform.translation.z);
        motion.delta = next - last;
    }
}

/// Open (or re-open) pass-through windows requested by the ability layer.
pub(crate) fn open_pass_through_windows(
    mut commands: Commands,
    tuning: Res<PlatformTuning>,
    mut events: MessageReader<PassThroughEvent>,
    mut pending: Query<&mut PassThrough>,
) {
    for event in events.read() {
        if let Ok(mut window) = pending.get_mut(event.platform) {
            // Already open: restart the window, last write wins.
            window.timer.start(tuning.pass_through_window);
        } else {
            let mut window = PassThrough::default();
            window.timer.start(tuning.pass_through_window);
            commands
                .entity(event.platform)
                .insert((window, ColliderDisabled));
            debug!("pass-through opened for {:?}", event.platform);
        }
    }
}

/// Restore collision once a pass-through window elapses. The window length
/// is fixed at trigger time and independent of anything the player does.
pub(crate) fn close_pass_through_windows(
    mut commands: Commands,
    time: Res<Time>,
    mut windows: Query<(Entity, &mut PassThrough)>,
) {
    let dt = time.delta_secs();

    for (entity, mut window) in &mut windows {
        if window.timer.tick(dt) {
            commands
                .entity(entity)
                .remove::<(PassThrough, ColliderDisabled)>();
            debug!("pass-through closed for {:?}", entity);
        }
    }
}

/// Start the collapse countdown the first time something stands on a
/// collapsible platform.
pub(crate) fn trigger_collapse(
    mut commands: Commands,
    riders: Query<&ContactState>,
    platforms: Query<&CollapsiblePlatform, Without<Collapsing>>,
) {
    for contacts in &riders {
        if !contacts.below || contacts.ground != GroundKind::CollapsiblePlatform {
            continue;
        }
        let Some(entity) = contacts.ground_entity else {
            continue;
        };
        if let Ok(platform) = platforms.get(entity) {
            let mut collapsing = Collapsing::default();
            collapsing.timer.start(platform.delay);
            commands.entity(entity).insert(collapsing);
            info!("platform {:?} starting to collapse", entity);
        }
    }
}

/// Let expired collapsible platforms give way and drop out of the level.
pub(crate) fn settle_collapse(
    mut commands: Commands,
    time: Res<Time>,
    mut collapsing: Query<(Entity, &mut Collapsing)>,
    mut falling: Query<(Entity, &mut Transform), With<Falling>>,
) {
    let dt = time.delta_secs();

    for (entity, mut state) in &mut collapsing {
        if state.timer.tick(dt) {
            commands
                .entity(entity)
                .remove::<Collapsing>()
                .insert((Falling, ColliderDisabled));
        }
    }

    for (entity, mut transform) in &mut falling {
        transform.translation.y -= COLLAPSE_FALL_SPEED * dt;
        if transform.translation.y < DESPAWN_FLOOR {
            commands.entity(entity).despawn();
        }
    }
}
