mod spawn;

use bevy::prelude::*;

use crate::core::LevelResetEvent;
use crate::platforms::PlatformTuning;
use crate::player::Player;
use crate::status::StatusTuning;
use spawn::{spawn_level, LevelEntity};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level)
            .add_systems(Update, handle_level_reset);
    }
}

/// Tears down every level entity (player included) and respawns everything
/// at its starting state.
pub(crate) fn handle_level_reset(
    mut commands: Commands,
    mut reset_events: MessageReader<LevelResetEvent>,
    level_entities: Query<Entity, Or<(With<LevelEntity>, With<Player>)>>,
    platform_tuning: Res<PlatformTuning>,
    status_tuning: Res<StatusTuning>,
) {
    if reset_events.read().next().is_none() {
        return;
    }

    for entity in &level_entities {
        commands.entity(entity).despawn();
    }
    info!("level reset");
    spawn::rebuild(&mut commands, &platform_tuning, &status_tuning);
}
