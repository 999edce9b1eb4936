//! Runtime health checker
//!
//! Prints a health report for its own process: service identity, elapsed
//! time, memory statistics and optional JSON output.

/// Build-time information (rustc version, target, git SHA, etc.)
pub mod build_info;

/// Command-line parsing and the end-to-end run
pub mod cli;

/// Logging configuration
pub mod config;

/// Feature demo printed after the report
pub mod demo;

pub mod error;

/// Synthetic health checks and console formatting
pub mod health;

/// Host introspection
pub mod host;

/// Report data model
pub mod report;

pub mod timer;

pub use error::{HealthError, Result};
