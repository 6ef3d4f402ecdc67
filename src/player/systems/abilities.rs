//! Player domain: the per-step ability state machine.
//!
//! Consumes latched input and the previous step's contact flags, decides
//! horizontal speed, jump/double-jump/wall-jump/jump-pad transitions, and
//! integrates gravity, then hands the resulting displacement to the
//! kinematic controller.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::controller::{ContactState, ControllerTuning, GroundCheck, GroundKind, KinematicBody, WallKind};
use crate::platforms::PassThroughEvent;
use crate::player::components::{
    AbilityState, Facing, Player, PlayerAbilities, PlayerMotion, WallJumpLock,
};
use crate::player::resources::{MovementTuning, PlayerInput};
use crate::status::Dead;

/// Launch speed produced by a jump pad.
///
/// Hard landings (impact above the pad's flat amount) bounce back scaled;
/// soft landings get the flat amount. Any held-button bonus rides on top,
/// and the pad's upper limit caps the whole thing.
pub fn jump_pad_launch(impact: f32, amount: f32, upper_limit: f32, bonus: f32, scale: f32) -> f32 {
    let base = if impact > amount { impact * scale } else { amount };
    (base + bonus).min(upper_limit)
}

/// Wall-jump velocity away from the touched wall, with the facing the
/// character ends up with.
pub fn wall_jump_velocity(from_left_wall: bool, speed: Vec2) -> (Vec2, Facing) {
    if from_left_wall {
        (Vec2::new(speed.x, speed.y), Facing::Right)
    } else {
        (Vec2::new(-speed.x, speed.y), Facing::Left)
    }
}

pub(crate) fn drive_movement(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    controller_tuning: Res<ControllerTuning>,
    mut input: ResMut<PlayerInput>,
    mut pass_through: MessageWriter<PassThroughEvent>,
    mut query: Query<
        (
            &ContactState,
            &PlayerAbilities,
            &mut AbilityState,
            &mut PlayerMotion,
            &mut WallJumpLock,
            &mut KinematicBody,
            &mut GroundCheck,
        ),
        (With<Player>, Without<Dead>),
    >,
) {
    let dt = time.delta_secs();

    for (contacts, abilities, mut state, mut motion, mut wall_lock, mut body, mut ground_check) in
        &mut query
    {
        if wall_lock.timer.tick(dt) {
            state.is_wall_jumping = false;
        }

        // Horizontal control, unless a wall jump still owns the axis.
        if !state.is_wall_jumping {
            motion.velocity.x = input.axis.x * tuning.walk_speed;
            if motion.velocity.x < 0.0 {
                state.facing = Facing::Left;
            } else if motion.velocity.x > 0.0 {
                state.facing = Facing::Right;
            }
        }

        if contacts.below {
            on_ground(
                contacts,
                &mut state,
                &mut motion,
                &mut ground_check,
                &mut input,
                &mut pass_through,
                &tuning,
                &controller_tuning,
            );
        } else {
            in_air(
                contacts,
                abilities,
                &mut state,
                &mut motion,
                &mut wall_lock,
                &mut input,
                &mut pass_through,
                &tuning,
                dt,
            );
        }

        body.move_by(motion.velocity * dt);
    }

    // Edges are consumed exactly once per step, taken or not.
    input.jump_started = false;
    input.jump_canceled = false;
}

#[allow(clippy::too_many_arguments)]
fn on_ground(
    contacts: &ContactState,
    state: &mut AbilityState,
    motion: &mut PlayerMotion,
    ground_check: &mut GroundCheck,
    input: &mut PlayerInput,
    pass_through: &mut MessageWriter<PassThroughEvent>,
    tuning: &MovementTuning,
    controller_tuning: &ControllerTuning,
) {
    // Impact speed is only meaningful on the landing step; grab it before
    // the grounded reset wipes the vertical velocity.
    if contacts.hit_ground_this_frame {
        motion.landing_speed = (-motion.velocity.y).max(0.0);
    }

    motion.velocity.y = 0.0;
    state.clear_air_flags();

    // Jump. Crouched on a one-way platform, the same press drops through
    // the platform instead.
    if input.jump_started {
        input.jump_started = false;
        if state.is_crouching && contacts.ground == GroundKind::OneWayPlatform {
            if let Some(platform) = contacts.ground_entity {
                pass_through.write(PassThroughEvent { platform });
            }
        } else {
            motion.velocity.y = tuning.jump_speed;
            state.is_jumping = true;
            ground_check.disable(controller_tuning.ground_check_window);
            debug!("jump");
        }
    }

    // Jump pad: launch from the landing snapshot, clamped by the pad.
    if contacts.ground == GroundKind::JumpPad {
        if let Some(pad) = contacts.jump_pad {
            if input.jump_held {
                motion.pad_bonus += tuning.pad_held_bonus;
            } else {
                motion.pad_bonus = 0.0;
            }
            motion.velocity.y = jump_pad_launch(
                motion.landing_speed,
                pad.amount,
                pad.upper_limit,
                motion.pad_bonus,
                tuning.jump_pad_scale,
            );
            ground_check.disable(controller_tuning.ground_check_window);
            debug!("jump pad launch at {:.1}", motion.velocity.y);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn in_air(
    contacts: &ContactState,
    abilities: &PlayerAbilities,
    state: &mut AbilityState,
    motion: &mut PlayerMotion,
    wall_lock: &mut WallJumpLock,
    input: &mut PlayerInput,
    pass_through: &mut MessageWriter<PassThroughEvent>,
    tuning: &MovementTuning,
    dt: f32,
) {
    // Early release cuts the rest of the rise short, once.
    if input.jump_canceled {
        input.jump_canceled = false;
        if motion.velocity.y > 0.0 {
            motion.velocity.y *= 0.5;
        }
    }

    if input.jump_started {
        input.jump_started = false;

        // Double jump requires clear air on both sides; wall jump requires
        // a wall. The two are mutually exclusive by construction.
        if abilities.can_double_jump && !contacts.touching_wall() {
            if !state.is_double_jumping {
                motion.velocity.y = tuning.double_jump_speed;
                state.is_double_jumping = true;
                debug!("double jump");
            }
        } else if abilities.can_wall_jump && contacts.touching_wall() {
            let speed = Vec2::new(tuning.x_wall_jump_speed, tuning.y_wall_jump_speed);
            let jumped = if contacts.left && motion.velocity.x <= 0.0 {
                let (velocity, facing) = wall_jump_velocity(true, speed);
                motion.velocity = velocity;
                state.facing = facing;
                true
            } else if contacts.right && motion.velocity.x >= 0.0 {
                let (velocity, facing) = wall_jump_velocity(false, speed);
                motion.velocity = velocity;
                state.facing = facing;
                true
            } else {
                false
            };

            if jumped {
                state.is_wall_jumping = true;
                wall_lock.timer.start(tuning.wall_jump_lock_time);
                if abilities.can_double_jump_after_wall_jump {
                    // The wall jump re-grants the double jump.
                    state.is_double_jumping = false;
                }
                debug!("wall jump, now facing {:?}", state.facing);
            }
        }
    }

    // Ceilings stop upward motion, except one-way platforms, which open a
    // pass-through window instead.
    if motion.velocity.y > 0.0 && contacts.above {
        if contacts.ceiling == GroundKind::OneWayPlatform {
            if let Some(platform) = contacts.ceiling_entity {
                pass_through.write(PassThroughEvent { platform });
            }
        } else {
            motion.velocity.y = 0.0;
        }
    }

    motion.velocity.y -= tuning.gravity * dt;

    // Sticky walls slow the slide down.
    let on_sticky = (contacts.left && contacts.left_wall == WallKind::Sticky)
        || (contacts.right && contacts.right_wall == WallKind::Sticky);
    if on_sticky && motion.velocity.y < -tuning.sticky_slide_speed {
        motion.velocity.y = -tuning.sticky_slide_speed;
    }
}
