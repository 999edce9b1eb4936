//! Test runner for orchestrating health checks

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::check::{CheckResult, CheckStatus, SystemCheck};

/// Results from running a health check suite
#[derive(Debug)]
pub struct HealthCheckReport {
    /// Individual check results with their labels, in execution order
    pub results: Vec<(String, CheckResult)>,
    /// Wall-clock time spanning the whole suite
    pub elapsed: Duration,
    /// Number of passing checks
    pub passed: usize,
    /// Number of checks with warnings
    pub warned: usize,
}

impl HealthCheckReport {
    /// Total number of checks run
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Returns true if there are any warnings
    pub fn has_warnings(&self) -> bool {
        self.warned > 0
    }

    /// Suite duration rounded to whole milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        let rounded = (self.elapsed + Duration::from_micros(500)).as_millis();
        u64::try_from(rounded).unwrap_or(u64::MAX)
    }
}

/// Orchestrates running health checks and collecting results
pub struct HealthCheckRunner {
    checks: Vec<Box<dyn SystemCheck>>,
}

impl HealthCheckRunner {
    /// Creates a new runner with no checks
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Adds a check to the runner
    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Runs all registered checks in order and returns a report
    ///
    /// A check that panics is still recorded as completed, with a warning.
    pub fn run(self) -> HealthCheckReport {
        let mut results = Vec::with_capacity(self.checks.len());
        let mut passed = 0;
        let mut warned = 0;

        let suite_start = Instant::now();
        for check in self.checks {
            let name = check.name().to_string();
            let start = Instant::now();
            let result = panic::catch_unwind(AssertUnwindSafe(|| check.check()))
                .unwrap_or_else(|_| {
                    warn!(check = %name, "Health check panicked");
                    CheckResult::warn("completed with an internal error")
                })
                .with_duration(start.elapsed());

            debug!(check = %name, duration = ?result.duration, status = ?result.status, "Health check finished");

            match result.status {
                CheckStatus::Pass => passed += 1,
                CheckStatus::Warn => warned += 1,
            }

            results.push((name, result));
        }

        HealthCheckReport {
            results,
            elapsed: suite_start.elapsed(),
            passed,
            warned,
        }
    }
}

impl Default for HealthCheckRunner {
    fn default() -> Self {
        Self::new()
    }
}
