use std::io;

use anyhow::Context;
use healthcheck::build_info;
use healthcheck::cli::{self, Cli};
use healthcheck::config::{AppConfig, LogConfig};
use healthcheck::host::SysinfoHost;
use healthcheck::timer::Timer;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(log.ansi && std::env::var_os("NO_COLOR").is_none())
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let timer = Timer::start();

    // Logging is not up yet, so a config error is reported after init
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    init_tracing(&config.log);
    if let Some(e) = config_error {
        warn!(error = %e, "Failed to load config, using default configuration");
    }
    debug!(build = %build_info::detailed_info(), "Starting health check");

    let args: Cli = cli::parse_args(std::env::args_os());
    let mut stdout = io::stdout().lock();
    cli::run(&args, SysinfoHost::new(), &timer, &mut stdout)
        .context("Failed to write health report")?;

    Ok(())
}
