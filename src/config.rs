//! Application configuration
//!
//! Only diagnostics are configurable. The report itself is fixed.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Environment variable prefix, e.g. `HEALTHCHECK_LOG__LEVEL=debug`
pub const ENV_PREFIX: &str = "HEALTHCHECK";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Whether log lines may contain ANSI colors
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            ansi: true,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Loads configuration from the default search locations
    ///
    /// Sources, lowest priority first:
    /// 1. Built-in defaults
    /// 2. `config/default.toml`, next to the executable or in the current directory
    /// 3. Environment variables with prefix `HEALTHCHECK_` (e.g., `HEALTHCHECK_LOG__LEVEL`)
    pub fn load() -> Result<Self> {
        Self::load_from(Self::find_config_dir().as_deref())
    }

    /// Loads configuration using `dir/default.toml` as the file source
    pub fn load_from(dir: Option<&Path>) -> Result<Self> {
        let defaults = LogConfig::default();
        let mut builder = Config::builder()
            .set_default("log.level", defaults.level)?
            .set_default("log.ansi", defaults.ansi)?;

        if let Some(dir) = dir {
            let path = dir.join("default");
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load_from(None).unwrap();
        assert_eq!(config.log.level, "warn");
        assert!(config.log.ansi);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[log]\nlevel = \"debug\"\nansi = false\n",
        )
        .unwrap();

        let config = AppConfig::load_from(Some(dir.path())).unwrap();
        assert_eq!(config.log.level, "debug");
        assert!(!config.log.ansi);
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[log]\nlevel = \"info\"\n").unwrap();

        let config = AppConfig::load_from(Some(dir.path())).unwrap();
        assert_eq!(config.log.level, "info");
        assert!(config.log.ansi);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[log\nlevel = ").unwrap();

        assert!(AppConfig::load_from(Some(dir.path())).is_err());
    }
}
