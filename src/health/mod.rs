//! Health check system
//!
//! Runs the fixed suite of synthetic checks and formats the results together
//! with the assembled [`HealthReport`](crate::report::HealthReport).
//!
//! # Example
//!
//! ```no_run
//! use healthcheck::health::{self, format_checks};
//! use healthcheck::host::SysinfoHost;
//!
//! let report = health::run_all_checks(SysinfoHost::new());
//! print!("{}", format_checks(&report));
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, SystemCheck};
pub use reporter::{format_checks, format_json, format_json_section, format_report};
pub use runner::{HealthCheckReport, HealthCheckRunner};

use crate::host::HostInfo;

/// Runs the four synthetic checks in their fixed order
pub fn run_all_checks<H: HostInfo + Clone + 'static>(host: H) -> HealthCheckReport {
    HealthCheckRunner::new()
        .add_check(checks::CpuCheck::new())
        .add_check(checks::MemoryCheck::new())
        .add_check(checks::FileSystemCheck::new(host.clone()))
        .add_check(checks::UserHomeCheck::new(host))
        .run()
}
