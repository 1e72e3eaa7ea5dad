//! Integration tests for the health check system

use field_camera::app::AppConfig;
use field_camera::health::{self, HealthCheckRunner, SystemCheck, checks::*};

#[test]
fn test_all_health_checks() {
    let report = health::run_all_checks();

    if !report.is_healthy() {
        eprintln!("\n{}", health::format_report(&report));
    }

    assert!(
        report.is_healthy(),
        "Health checks failed: {} failures, {} warnings",
        report.failed,
        report.warned
    );
}

#[test]
fn test_viewport_check() {
    let result = ViewportCheck::new().check();
    assert!(result.status.is_ok(), "Viewport check failed: {}", result.message);
    assert!(!result.details.is_empty());
}

#[test]
fn test_input_check_fails_without_keyboard() {
    let mut config = AppConfig::default();
    config.input.keyboard = false;
    let result = InputCheck::with_config(config).check();
    assert!(result.status.is_fail());
    assert_eq!(result.message, "Camera requires a keyboard");
}

#[test]
fn test_input_check_warns_without_pinch_slots() {
    let mut config = AppConfig::default();
    config.input.touch_pointers = 1;
    let result = InputCheck::with_config(config).check();
    assert_eq!(result.status, health::CheckStatus::Warn);
}

#[test]
fn test_build_info_check() {
    let result = BuildInfoCheck::new().check();
    assert!(result.status.is_ok(), "Build info check failed: {}", result.message);
}

#[test]
fn test_runner_collects_all_checks() {
    let report = HealthCheckRunner::new()
        .add_check(ViewportCheck::new())
        .add_check(BuildInfoCheck::new())
        .run();

    assert_eq!(report.total, 2, "Expected 2 checks in report");
    assert_eq!(report.passed + report.warned + report.failed, report.total);
    assert!(health::format_report(&report).contains("Viewport"));
}
