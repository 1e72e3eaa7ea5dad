//! Build information health check

use crate::build_info;
use crate::health::check::{CheckResult, SystemCheck};

/// Reports the metadata embedded by the build script
#[derive(Default)]
pub struct BuildInfoCheck;

impl BuildInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl SystemCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Reports build metadata (version, target, rustc)")
    }

    fn check(&self) -> CheckResult {
        let details = build_info::detailed_info()
            .into_iter()
            .map(|line| format!("  {line}"))
            .collect();

        if build_info::BUILD_TIMESTAMP.is_empty() {
            CheckResult::warn("Build timestamp missing").with_details(details)
        } else {
            CheckResult::pass(build_info::version_string()).with_details(details)
        }
    }
}
