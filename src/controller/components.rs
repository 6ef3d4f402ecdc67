//! Controller domain: body, contact state, surface kinds, and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::OneShot;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Standable surfaces (floors, slopes, platforms)
    Ground,
    /// Platforms that block only from above
    OneWay,
    /// Wall surfaces
    Wall,
    /// The player character
    Player,
    /// Damaging level objects (spikes, traps)
    Hazard,
}

/// Semantic classification of a surface struck beneath or above a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroundKind {
    #[default]
    None,
    LevelGeometry,
    OneWayPlatform,
    MovingPlatform,
    CollapsiblePlatform,
    JumpPad,
}

/// Semantic classification of a wall surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallKind {
    #[default]
    None,
    Normal,
    Sticky,
}

/// Ground semantics attached to a collidable entity at level-load time.
/// Surfaces without one classify as plain [`GroundKind::LevelGeometry`].
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundEffector {
    pub kind: GroundKind,
}

/// Wall semantics attached to a collidable entity at level-load time.
/// Surfaces without one classify as [`WallKind::Normal`].
#[derive(Component, Debug, Clone, Copy)]
pub struct WallEffector {
    pub kind: WallKind,
}

/// Launch parameters carried by a jump-pad surface.
#[derive(Component, Debug, Clone, Copy)]
pub struct JumpPadForce {
    /// Flat launch speed for soft landings.
    pub amount: f32,
    /// Hard cap on any launch speed the pad can produce.
    pub upper_limit: f32,
}

/// Pending displacement for a kinematically moved body.
///
/// Callers accumulate into it during the step via [`KinematicBody::move_by`];
/// the controller consumes it in one position write and resets it.
#[derive(Component, Debug, Default)]
pub struct KinematicBody {
    pub move_amount: Vec2,
}

impl KinematicBody {
    /// Request displacement for this step. Additive: multiple callers compose.
    pub fn move_by(&mut self, displacement: Vec2) {
        self.move_amount += displacement;
    }
}

/// Suppression window for the downward ground cast.
///
/// A jump impulse disables ground detection for a short window so the body
/// can clear the surface it just left instead of re-snapping to it.
#[derive(Component, Debug, Default)]
pub struct GroundCheck {
    pub(crate) lock: OneShot,
}

impl GroundCheck {
    /// Suppress ground detection for `window` seconds. Re-arming while a
    /// window is pending replaces it (last write wins).
    pub fn disable(&mut self, window: f32) {
        self.lock.start(window);
    }

    pub fn suppressed(&self) -> bool {
        self.lock.active()
    }
}

/// Per-step contact flags, fully recomputed from fresh shape casts.
///
/// The only state carried across steps is the previous `below`, which feeds
/// the one-step `hit_ground_this_frame` edge trigger.
#[derive(Component, Debug, Default)]
pub struct ContactState {
    pub below: bool,
    pub above: bool,
    pub left: bool,
    pub right: bool,

    pub ground: GroundKind,
    pub ceiling: GroundKind,
    pub left_wall: WallKind,
    pub right_wall: WallKind,

    /// Signed angle (degrees) between the ground normal and straight up.
    pub slope_angle: f32,
    /// True for exactly one step when `below` transitions false -> true.
    pub hit_ground_this_frame: bool,

    /// Pad parameters, populated only while grounded on a jump pad.
    pub jump_pad: Option<JumpPadForce>,
    /// Entity struck by the ground cast this step (whatever its kind).
    pub ground_entity: Option<Entity>,
    /// Entity struck by the ceiling cast this step.
    pub ceiling_entity: Option<Entity>,
    /// Rider linkage: the moving platform currently stood on. A non-owning
    /// lookup key, cleared the instant ground detection fails.
    pub platform: Option<Entity>,
}

impl ContactState {
    pub fn touching_wall(&self) -> bool {
        self.left || self.right
    }

    pub(crate) fn clear_ground(&mut self) {
        self.below = false;
        self.ground = GroundKind::None;
        self.slope_angle = 0.0;
        self.jump_pad = None;
        self.ground_entity = None;
        self.platform = None;
    }
}

/// Capsule dimensions as (half-width, half-height), read from the body's
/// collider so crouch resizing is picked up automatically. `None` for a
/// non-capsule collider, a setup error the caller reports.
pub(crate) fn capsule_extents(collider: &Collider) -> Option<Vec2> {
    collider.shape_scaled().as_capsule().map(|capsule| {
        Vec2::new(
            capsule.radius,
            capsule.radius + capsule.segment.length() / 2.0,
        )
    })
}
