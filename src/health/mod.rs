//! Startup self-tests
//!
//! Each check exercises one subsystem (configuration, camera clamping, input
//! setup, build metadata) without opening a window, so the suite runs in CI
//! and from `field-camera --health`.
//!
//! # Example
//!
//! ```no_run
//! use field_camera::health::{self, HealthCheckRunner, checks::*};
//!
//! let report = HealthCheckRunner::new()
//!     .add_check(ConfigCheck::new())
//!     .add_check(ViewportCheck::new())
//!     .run();
//!
//! health::print_report(&report);
//! std::process::exit(report.exit_code());
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, SystemCheck};
pub use reporter::{format_report, print_report};
pub use runner::{HealthCheckReport, HealthCheckRunner};

/// Runs every built-in check
pub fn run_all_checks() -> HealthCheckReport {
    HealthCheckRunner::new()
        .add_check(checks::ConfigCheck::new())
        .add_check(checks::ViewportCheck::new())
        .add_check(checks::InputCheck::new())
        .add_check(checks::BuildInfoCheck::new())
        .run()
}
