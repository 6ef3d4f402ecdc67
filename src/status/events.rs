//! Status domain: health adjustment and death events.

use bevy::ecs::message::Message;
use bevy::prelude::Entity;

/// Signed health adjustment: negative damages, positive heals.
#[derive(Debug)]
pub struct AdjustHealthEvent {
    pub target: Entity,
    pub delta: i32,
}

impl Message for AdjustHealthEvent {}
