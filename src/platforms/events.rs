//! Platforms domain: pass-through requests from the ability layer.

use bevy::ecs::message::Message;
use bevy::prelude::Entity;

/// Asks for a one-way platform's collision to be disabled for the fixed
/// pass-through window. The platform was identified by a probe in the
/// direction of approach at the moment of triggering; it is this exact
/// entity that gets restored, wherever it has moved in the interim.
#[derive(Debug)]
pub struct PassThroughEvent {
    pub platform: Entity,
}

impl Message for PassThroughEvent {}
