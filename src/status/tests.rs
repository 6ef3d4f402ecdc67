//! Status domain: tests for health bounds and the one-shot death.

use super::components::{Health, HealthChange, Invulnerable};

// -----------------------------------------------------------------------------
// Health bound tests
// -----------------------------------------------------------------------------

#[test]
fn test_health_starts_full() {
    let health = Health::new(100);
    assert_eq!(health.current, 100);
    assert!(!health.is_dead());
}

#[test]
fn test_health_never_exceeds_max() {
    let mut health = Health::new(100);
    assert_eq!(health.adjust(50), HealthChange::Unchanged);
    assert_eq!(health.current, 100);

    health.adjust(-30);
    assert_eq!(health.adjust(1000), HealthChange::Healed);
    assert_eq!(health.current, 100);
}

#[test]
fn test_health_never_goes_below_zero() {
    let mut health = Health::new(100);
    health.adjust(-1000);
    assert_eq!(health.current, 0);
}

#[test]
fn test_damage_and_heal_adjustments() {
    let mut health = Health::new(100);
    assert_eq!(health.adjust(-10), HealthChange::Damaged);
    assert_eq!(health.current, 90);
    assert_eq!(health.adjust(5), HealthChange::Healed);
    assert_eq!(health.current, 95);
    assert_eq!(health.adjust(0), HealthChange::Unchanged);
}

// -----------------------------------------------------------------------------
// Death tests
// -----------------------------------------------------------------------------

#[test]
fn test_death_fires_exactly_once() {
    let mut health = Health::new(20);

    // Two hits land in the same step; only the one crossing zero reports
    // a death.
    assert_eq!(health.adjust(-20), HealthChange::Died);
    assert_eq!(health.adjust(-20), HealthChange::Unchanged);
    assert!(health.is_dead());
}

#[test]
fn test_overkill_single_hit_dies_once() {
    let mut health = Health::new(20);
    assert_eq!(health.adjust(-500), HealthChange::Died);
    assert_eq!(health.current, 0);
}

// -----------------------------------------------------------------------------
// Invulnerability tests
// -----------------------------------------------------------------------------

#[test]
fn test_invulnerability_window_lapses() {
    let mut invulnerable = Invulnerable::default();
    assert!(!invulnerable.is_invulnerable());

    invulnerable.timer.start(0.5);
    assert!(invulnerable.is_invulnerable());

    // Tick past the window.
    let mut elapsed = 0.0;
    while elapsed < 0.6 {
        invulnerable.timer.tick(1.0 / 60.0);
        elapsed += 1.0 / 60.0;
    }
    assert!(!invulnerable.is_invulnerable());
}
