//! Error types for the health checker

use thiserror::Error;

/// Errors raised outside the report itself
///
/// Building the report never fails; these cover the ambient concerns around
/// it (configuration, JSON encoding, writing output).
#[derive(Debug, Error)]
pub enum HealthError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HealthError>;
