//! Check trait and result types

use std::time::Duration;

use colored::Colorize;

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    /// Usable, but something looked off
    Warn,
    Fail,
}

impl CheckStatus {
    /// Pass or Warn
    pub fn is_ok(&self) -> bool {
        !self.is_fail()
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, CheckStatus::Fail)
    }

    /// Status label colored for terminals
    pub fn as_colored_str(&self) -> String {
        match self {
            CheckStatus::Pass => "PASS".green().to_string(),
            CheckStatus::Warn => "WARN".yellow().to_string(),
            CheckStatus::Fail => "FAIL".red().to_string(),
        }
    }
}

/// Result of one check, with the step-by-step lines that led to it
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub status: CheckStatus,
    pub message: String,
    pub details: Vec<String>,
    pub duration: Duration,
}

impl CheckResult {
    fn with_status(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Pass, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Warn, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Fail, message)
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// A subsystem self-test
pub trait SystemCheck {
    /// Name shown in the report
    fn name(&self) -> &'static str;

    fn check(&self) -> CheckResult;

    fn description(&self) -> Option<&'static str> {
        None
    }
}

/// Collects detail lines while a check runs and turns the first failure into
/// a failing result
#[derive(Debug, Default)]
pub struct Steps {
    lines: Vec<String>,
}

impl Steps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a step; returns `Err` with a failing result if `ok` is false
    pub fn expect(&mut self, ok: bool, what: impl Into<String>) -> Result<(), CheckResult> {
        let what = what.into();
        if ok {
            self.lines.push(format!("  ✓ {what}"));
            Ok(())
        } else {
            self.lines.push(format!("  ✗ {what}"));
            Err(CheckResult::fail(format!("Failed: {what}")).with_details(self.lines.clone()))
        }
    }

    pub fn note(&mut self, line: impl Into<String>) {
        self.lines.push(format!("  {}", line.into()));
    }

    pub fn finish(self, result: CheckResult) -> CheckResult {
        result.with_details(self.lines)
    }
}
