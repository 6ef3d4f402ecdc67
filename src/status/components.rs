//! Status domain: health, invulnerability, and damage-dealing components.

use bevy::prelude::*;

use crate::core::OneShot;

/// What a health adjustment amounted to, used to drive the follow-up
/// (invulnerability window, one-shot death sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthChange {
    /// Damage landed but the character survived.
    Damaged,
    /// This adjustment brought health to zero from above. Fires at most
    /// once per life, no matter how many hits land the same step.
    Died,
    Healed,
    /// Nothing happened (zero delta, heal at full health, damage at zero).
    Unchanged,
}

/// Health bounded to `[0, max]`.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    /// Apply a signed delta (negative damages, positive heals), clamped to
    /// `[0, max]`. Invulnerability gating happens in the caller; this is
    /// pure bookkeeping.
    pub fn adjust(&mut self, delta: i32) -> HealthChange {
        let was_alive = self.current > 0;
        let before = self.current;
        self.current = (self.current + delta).clamp(0, self.max);

        if self.current == before {
            HealthChange::Unchanged
        } else if delta > 0 {
            HealthChange::Healed
        } else if self.current == 0 && was_alive {
            HealthChange::Died
        } else {
            HealthChange::Damaged
        }
    }
}

/// Post-damage grace window: damage is ignored while it is active.
#[derive(Component, Debug, Default)]
pub struct Invulnerable {
    pub(crate) timer: OneShot,
}

impl Invulnerable {
    pub fn is_invulnerable(&self) -> bool {
        self.timer.active()
    }
}

/// Signed health delta a level object applies on contact (negative damages).
#[derive(Component, Debug, Clone, Copy)]
pub struct ContactDamage {
    pub amount: i32,
}

/// Marks a character whose death sequence has already run.
#[derive(Component, Debug)]
pub struct Dead;

/// Delay between death and the level reset, inserted by the death sequence.
#[derive(Component, Debug, Default)]
pub(crate) struct RespawnDelay {
    pub(crate) timer: OneShot,
}
