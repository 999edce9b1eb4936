//! Command-line surface and the end-to-end run

use std::ffi::OsString;
use std::io::Write;

use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};

use crate::demo;
use crate::error::Result;
use crate::health::{self, format_checks, format_json_section, format_report};
use crate::host::HostInfo;
use crate::report::{HealthReport, SystemInfo};
use crate::timer::Timer;

/// Prints a health-check report for this process
///
/// `--json` is the only recognized flag; help and version flags are
/// disabled so `-h` or `--version` land in `ignored` like any other word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "healthcheck", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Append the report as pretty-printed JSON
    #[arg(long, overrides_with = "json")]
    pub json: bool,

    /// Anything else on the command line; accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    /// True when `--json` appears anywhere in the arguments
    pub fn wants_json(&self) -> bool {
        self.json || self.ignored.iter().any(|arg| arg == "--json")
    }
}

/// Parses arguments without ever rejecting them
///
/// A parse failure falls back to scanning the raw arguments for `--json`.
/// Nothing is reported to the user either way.
pub fn parse_args<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            debug!(error = %e, "Could not parse arguments, scanning for --json");
            Cli {
                json: args.iter().skip(1).any(|arg| arg == "--json"),
                ignored: Vec::new(),
            }
        }
    }
}

/// Runs the whole pipeline, writing the console output to `out`
///
/// The host snapshot is taken before the checks run; the report is assembled
/// after them so its uptime covers the suite.
pub fn run<H, W>(cli: &Cli, host: H, timer: &Timer, out: &mut W) -> Result<HealthReport>
where
    H: HostInfo + Clone + 'static,
    W: Write,
{
    writeln!(out, "{}", "🦀 Rust CLI Health Checker".bold())?;

    let system = SystemInfo::capture(&host);
    let checks = health::run_all_checks(host);
    write!(out, "{}", format_checks(&checks))?;

    let report = HealthReport::assemble(system, timer);
    info!(
        uptime = %report.uptime,
        execution_ms = checks.elapsed_ms(),
        warnings = checks.warned,
        "Health report assembled"
    );
    write!(out, "{}", format_report(&report, checks.elapsed_ms()))?;

    if cli.wants_json() {
        write!(out, "{}", format_json_section(&report)?)?;
    }

    write!(out, "{}", demo::format_demo())?;

    writeln!(
        out,
        "\n{} Rust health check completed successfully!",
        "✅".green()
    )?;
    out.flush()?;

    Ok(report)
}
