mod content;
mod controller;
mod core;
mod level;
mod platforms;
mod player;
mod status;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ridgerun".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            controller::ControllerPlugin,
            platforms::PlatformsPlugin,
            player::PlayerPlugin,
            status::StatusPlugin,
            level::LevelPlugin,
        ))
        .run();
}
