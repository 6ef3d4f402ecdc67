//! Player domain: system modules for input and abilities.

pub(crate) mod abilities;
pub(crate) mod crouch;
pub(crate) mod input;

pub(crate) use abilities::drive_movement;
pub(crate) use crouch::update_crouch;
pub(crate) use input::latch_input;
