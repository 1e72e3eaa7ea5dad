//! Configuration health check

use crate::app::AppConfig;
use crate::health::check::{CheckResult, SystemCheck};

/// Loads every profile and validates its camera tuning
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    pub fn new() -> Self {
        Self::with_profiles(vec!["debug", "release"])
    }

    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates configuration loading from files and environment")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut failed = false;

        for profile in &self.profiles {
            let loaded = AppConfig::load(profile)
                .map_err(|e| e.to_string())
                .and_then(|config| {
                    config
                        .camera
                        .settings()
                        .map(|_| config)
                        .map_err(|e| e.to_string())
                });
            match loaded {
                Ok(config) => details.push(format!(
                    "  ✓ Profile '{}': window {}x{}, keyboard {}, {} touch slots",
                    profile,
                    config.window.width,
                    config.window.height,
                    config.input.keyboard,
                    config.input.touch_pointers
                )),
                Err(e) => {
                    details.push(format!("  ✗ Profile '{profile}': {e}"));
                    failed = true;
                }
            }
        }

        // An unusable APP_ override only matters if someone runs with it
        let env_problem = match AppConfig::load_from_env() {
            Ok(config) => {
                details.push(format!(
                    "  ✓ Environment config: profile '{}' loaded",
                    config.profile
                ));
                false
            }
            Err(e) => {
                details.push(format!("  ⚠ Environment config: {e}"));
                true
            }
        };

        if failed {
            CheckResult::fail("Failed to load one or more config profiles").with_details(details)
        } else if env_problem {
            CheckResult::warn("Config loaded with warnings").with_details(details)
        } else {
            CheckResult::pass(format!("{} profiles validated", self.profiles.len()))
                .with_details(details)
        }
    }
}
