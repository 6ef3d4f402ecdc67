//! Core domain: tests for one-shot countdown windows.

use super::OneShot;

const DT: f32 = 1.0 / 60.0;

#[test]
fn test_one_shot_idle_by_default() {
    let mut window = OneShot::default();
    assert!(!window.active());
    assert!(!window.tick(DT));
}

#[test]
fn test_one_shot_fires_exactly_once() {
    let mut window = OneShot::default();
    window.start(3.0 * DT);

    assert!(window.active());
    assert!(!window.tick(DT));
    assert!(!window.tick(DT));
    assert!(window.tick(DT));

    // Expired windows stay quiet.
    assert!(!window.active());
    assert!(!window.tick(DT));
}

#[test]
fn test_one_shot_restart_supersedes_pending_window() {
    let mut window = OneShot::default();
    window.start(2.0 * DT);
    assert!(!window.tick(DT));

    // Re-arming replaces the old deadline instead of erroring or stacking.
    window.start(3.0 * DT);
    assert!(!window.tick(DT));
    assert!(!window.tick(DT));
    assert!(window.tick(DT));
}

#[test]
fn test_one_shot_zero_duration_never_fires() {
    let mut window = OneShot::default();
    window.start(0.0);
    assert!(!window.active());
    assert!(!window.tick(DT));
}

#[test]
fn test_one_shot_negative_duration_clamped() {
    let mut window = OneShot::default();
    window.start(-1.0);
    assert!(!window.active());
}
