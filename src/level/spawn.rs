//! Level domain: demo level and player spawning.
//!
//! Thin glue: places one of every surface kind the controller understands so
//! the whole movement engine is exercised from a fresh run.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{
    ContactState, GameLayer, GroundCheck, GroundEffector, GroundKind, JumpPadForce, KinematicBody,
    WallEffector, WallKind,
};
use crate::platforms::{
    CollapsiblePlatform, MovingPlatform, OneWayPlatform, PlatformMotion, PlatformTuning,
};
use crate::player::{
    AbilityState, CapsuleProfile, Player, PlayerAbilities, PlayerMotion, WallJumpLock,
};
use crate::status::{ContactDamage, Health, Invulnerable, StatusTuning};

/// Everything spawned by the level so a reset can clear it in one query.
#[derive(Component, Debug)]
pub(crate) struct LevelEntity;

const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 60.0, 0.0);

pub(crate) fn spawn_level(
    mut commands: Commands,
    platform_tuning: Res<PlatformTuning>,
    status_tuning: Res<StatusTuning>,
) {
    rebuild(&mut commands, &platform_tuning, &status_tuning);
}

pub(crate) fn rebuild(
    commands: &mut Commands,
    platform_tuning: &PlatformTuning,
    status_tuning: &StatusTuning,
) {
    spawn_terrain(commands, platform_tuning);
    spawn_player(commands, status_tuning);
    info!("level spawned");
}

fn spawn_terrain(commands: &mut Commands, platform_tuning: &PlatformTuning) {
    // Main floor.
    spawn_slab(commands, Vec2::new(0.0, -24.0), Vec2::new(1200.0, 48.0), 0.0);

    // A standable slope and, further right, a face too steep to stand on.
    spawn_slab(commands, Vec2::new(760.0, 40.0), Vec2::new(320.0, 48.0), 30.0);
    spawn_slab(commands, Vec2::new(1060.0, 120.0), Vec2::new(320.0, 48.0), 65.0);

    // Bounding walls, the right one sticky.
    spawn_wall(commands, Vec2::new(-620.0, 200.0), WallKind::Normal);
    spawn_wall(commands, Vec2::new(620.0, 200.0), WallKind::Sticky);

    // One-way platforms stacked for drop-through / jump-up testing.
    spawn_one_way(commands, Vec2::new(-200.0, 80.0));
    spawn_one_way(commands, Vec2::new(-200.0, 180.0));

    // Moving platform on a horizontal-then-vertical loop.
    spawn_moving_platform(
        commands,
        vec![
            Vec2::new(120.0, 140.0),
            Vec2::new(360.0, 140.0),
            Vec2::new(360.0, 260.0),
        ],
        120.0,
    );

    // Collapsible ledge.
    commands.spawn((
        LevelEntity,
        CollapsiblePlatform {
            delay: platform_tuning.collapse_delay,
        },
        GroundEffector {
            kind: GroundKind::CollapsiblePlatform,
        },
        RigidBody::Static,
        Collider::rectangle(96.0, 16.0),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        Sprite {
            color: Color::srgb(0.7, 0.5, 0.3),
            custom_size: Some(Vec2::new(96.0, 16.0)),
            ..default()
        },
        Transform::from_xyz(-420.0, 120.0, 0.0),
    ));

    // Jump pad.
    commands.spawn((
        LevelEntity,
        GroundEffector {
            kind: GroundKind::JumpPad,
        },
        JumpPadForce {
            amount: 360.0,
            upper_limit: 720.0,
        },
        RigidBody::Static,
        Collider::rectangle(64.0, 16.0),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        Sprite {
            color: Color::srgb(0.9, 0.8, 0.2),
            custom_size: Some(Vec2::new(64.0, 16.0)),
            ..default()
        },
        Transform::from_xyz(240.0, 8.0, 0.0),
    ));

    // Spikes.
    commands.spawn((
        LevelEntity,
        ContactDamage { amount: -10 },
        RigidBody::Static,
        Collider::rectangle(64.0, 24.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]),
        Sprite {
            color: Color::srgb(0.8, 0.2, 0.2),
            custom_size: Some(Vec2::new(64.0, 24.0)),
            ..default()
        },
        Transform::from_xyz(-80.0, 12.0, 0.0),
    ));
}

fn spawn_slab(commands: &mut Commands, center: Vec2, size: Vec2, tilt_degrees: f32) {
    commands.spawn((
        LevelEntity,
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        Sprite {
            color: Color::srgb(0.4, 0.4, 0.45),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 0.0)
            .with_rotation(Quat::from_rotation_z(tilt_degrees.to_radians())),
    ));
}

fn spawn_wall(commands: &mut Commands, center: Vec2, kind: WallKind) {
    let size = Vec2::new(32.0, 400.0);
    commands.spawn((
        LevelEntity,
        WallEffector { kind },
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]),
        Sprite {
            color: match kind {
                WallKind::Sticky => Color::srgb(0.3, 0.6, 0.35),
                _ => Color::srgb(0.35, 0.35, 0.4),
            },
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 0.0),
    ));
}

fn spawn_one_way(commands: &mut Commands, center: Vec2) {
    let size = Vec2::new(128.0, 12.0);
    commands.spawn((
        LevelEntity,
        OneWayPlatform,
        GroundEffector {
            kind: GroundKind::OneWayPlatform,
        },
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::OneWay, [GameLayer::Player]),
        Sprite {
            color: Color::srgb(0.5, 0.45, 0.6),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 0.0),
    ));
}

fn spawn_moving_platform(commands: &mut Commands, waypoints: Vec<Vec2>, speed: f32) {
    let Some(platform) = MovingPlatform::new(waypoints, speed) else {
        error!("moving platform configured with no waypoints; skipping spawn");
        return;
    };
    let start = platform.waypoints[0];

    let size = Vec2::new(128.0, 16.0);
    commands.spawn((
        LevelEntity,
        platform,
        PlatformMotion::default(),
        GroundEffector {
            kind: GroundKind::MovingPlatform,
        },
        RigidBody::Kinematic,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        Sprite {
            color: Color::srgb(0.3, 0.5, 0.7),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(start.x, start.y, 0.0),
    ));
}

fn spawn_player(commands: &mut Commands, status_tuning: &StatusTuning) {
    let profile = CapsuleProfile {
        radius: 12.0,
        length: 24.0,
    };

    commands.spawn((
        // Identity & movement
        (
            Player,
            KinematicBody::default(),
            ContactState::default(),
            GroundCheck::default(),
            AbilityState::default(),
            PlayerAbilities::default(),
            PlayerMotion::default(),
            WallJumpLock::default(),
            profile,
        ),
        // Status
        (Health::new(status_tuning.max_health), Invulnerable::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN),
        // Physics
        (
            RigidBody::Kinematic,
            Collider::capsule(profile.radius, profile.length),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::OneWay,
                    GameLayer::Wall,
                    GameLayer::Hazard,
                ],
            ),
        ),
    ));
}
