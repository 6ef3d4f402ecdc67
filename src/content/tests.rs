//! Content domain: tests for tuning file parsing.

use std::path::Path;

use super::{load_tuning, TuningFile};

fn parse(source: &str) -> TuningFile {
    ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .from_str(source)
        .expect("tuning source should parse")
}

#[test]
fn test_empty_file_yields_defaults() {
    let tuning = parse("()");
    assert_eq!(tuning.controller.raycast_distance, 4.0);
    assert_eq!(tuning.movement.walk_speed, 240.0);
    assert_eq!(tuning.platforms.pass_through_window, 0.75);
    assert_eq!(tuning.status.max_health, 100);
}

#[test]
fn test_partial_file_overrides_only_named_sections() {
    let tuning = parse(
        r#"(
            movement: (
                walk_speed: 300.0,
                jump_speed: 420.0,
            ),
        )"#,
    );
    assert_eq!(tuning.movement.walk_speed, 300.0);
    assert_eq!(tuning.movement.jump_speed, 420.0);
    // Unnamed fields and sections keep their defaults.
    assert_eq!(tuning.movement.gravity, 480.0);
    assert_eq!(tuning.controller.slope_angle_limit, 50.0);
}

#[test]
fn test_controller_section_roundtrip() {
    let tuning = parse(
        r#"(
            controller: (
                raycast_distance: 6.0,
                slope_angle_limit: 45.0,
                down_force_adjustment: 1.5,
                ground_check_window: 0.2,
            ),
        )"#,
    );
    assert_eq!(tuning.controller.raycast_distance, 6.0);
    assert_eq!(tuning.controller.slope_angle_limit, 45.0);
    assert_eq!(tuning.controller.down_force_adjustment, 1.5);
    assert_eq!(tuning.controller.ground_check_window, 0.2);
}

#[test]
fn test_missing_file_reports_load_error() {
    let result = load_tuning(Path::new("assets/data/does_not_exist.ron"));
    let error = result.expect_err("missing file should error");
    assert!(error.message.contains("IO error"));
}
