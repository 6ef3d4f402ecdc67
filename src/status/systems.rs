//! Status domain: contact damage, health application, death, and respawn.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::LevelResetEvent;
use crate::player::Player;
use crate::status::components::{ContactDamage, Dead, Health, Invulnerable, RespawnDelay};
use crate::status::events::AdjustHealthEvent;
use crate::status::resources::StatusTuning;

/// Turn hazard contact into health adjustments.
pub(crate) fn contact_damage(
    mut collisions: MessageReader<CollisionStart>,
    hazards: Query<&ContactDamage>,
    players: Query<(), With<Player>>,
    mut adjustments: MessageWriter<AdjustHealthEvent>,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player, hazard) in pairs {
            if players.get(player).is_err() {
                continue;
            }
            let Ok(damage) = hazards.get(hazard) else {
                continue;
            };
            adjustments.write(AdjustHealthEvent {
                target: player,
                delta: damage.amount,
            });
        }
    }
}

/// Apply pending health adjustments: damage gated by invulnerability, a
/// surviving hit opening the grace window, death firing the one-shot
/// sequence.
pub(crate) fn apply_health(
    mut commands: Commands,
    tuning: Res<StatusTuning>,
    mut adjustments: MessageReader<AdjustHealthEvent>,
    mut targets: Query<(&mut Health, &mut Invulnerable, Has<Dead>, &mut Visibility)>,
) {
    use crate::status::components::HealthChange;

    for event in adjustments.read() {
        let Ok((mut health, mut invulnerable, already_dead, mut visibility)) =
            targets.get_mut(event.target)
        else {
            continue;
        };

        if already_dead {
            continue;
        }
        if event.delta < 0 && invulnerable.is_invulnerable() {
            continue;
        }

        match health.adjust(event.delta) {
            HealthChange::Damaged => {
                invulnerable.timer.start(tuning.invulnerability_window);
                debug!("player took {} damage, {} left", -event.delta, health.current);
            }
            HealthChange::Died => {
                info!("player died");
                *visibility = Visibility::Hidden;
                let mut delay = RespawnDelay::default();
                delay.timer.start(tuning.respawn_delay);
                commands.entity(event.target).insert((Dead, delay));
            }
            HealthChange::Healed | HealthChange::Unchanged => {}
        }
    }
}

pub(crate) fn tick_invulnerability(time: Res<Time>, mut query: Query<&mut Invulnerable>) {
    let dt = time.delta_secs();
    for mut invulnerable in &mut query {
        invulnerable.timer.tick(dt);
    }
}

/// After the death delay, ask for a level reset.
pub(crate) fn tick_respawn(
    time: Res<Time>,
    mut pending: Query<&mut RespawnDelay>,
    mut resets: MessageWriter<LevelResetEvent>,
) {
    let dt = time.delta_secs();
    for mut delay in &mut pending {
        if delay.timer.tick(dt) {
            resets.write(LevelResetEvent);
        }
    }
}
