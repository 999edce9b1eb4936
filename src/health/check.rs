//! Core health check trait and types

use std::time::Duration;

/// Status of a system check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully
    Pass,
    /// Check completed but had to substitute a value or recover
    Warn,
}

impl CheckStatus {
    /// Returns true if the check passed without warnings
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckStatus::Pass)
    }

    /// Returns the status badge shown in front of a check's summary
    pub fn as_colored_str(&self) -> String {
        use colored::Colorize;
        match self {
            CheckStatus::Pass => "✅".green().to_string(),
            CheckStatus::Warn => "⚠".yellow().to_string(),
        }
    }
}

/// Result of a system check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    /// The status of the check
    pub status: CheckStatus,
    /// Confirmation shown after the check's label, e.g. `Sum: 14`
    pub summary: String,
    /// How long the check took
    pub duration: Duration,
}

impl CheckResult {
    /// Creates a passing check result
    pub fn pass(summary: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Pass,
            summary: summary.into(),
            duration: Duration::ZERO,
        }
    }

    /// Creates a warning check result
    pub fn warn(summary: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Warn,
            summary: summary.into(),
            duration: Duration::ZERO,
        }
    }

    /// Sets the duration for this check
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Trait for synthetic health checks
pub trait SystemCheck {
    /// Label printed before the check's result, e.g. `CPU Test`
    fn name(&self) -> &'static str;

    /// Perform the health check
    fn check(&self) -> CheckResult;
}
