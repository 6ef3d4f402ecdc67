//! Core domain: run-flow events shared across domains.

use bevy::ecs::message::Message;

/// Requests a full level reset (player respawn + level re-spawn).
/// Written by the status domain after the death delay elapses.
#[derive(Debug)]
pub struct LevelResetEvent;

impl Message for LevelResetEvent {}
