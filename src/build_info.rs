//! Build-time information
//!
//! This module provides access to build metadata captured at compile time,
//! including build timestamps, cargo configuration, and compiler version.
//! The rustc values double as the "language version" and "runtime version"
//! shown in the health report.

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., x86_64-unknown-linux-gnu, x86_64-apple-darwin)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version (e.g., 1.85.0)
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Rust channel (stable, beta, or nightly)
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Git commit SHA, absent when built outside a git checkout
pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

/// Git branch name, absent when built outside a git checkout
pub const GIT_BRANCH: Option<&str> = option_env!("VERGEN_GIT_BRANCH");

/// Language label reported in the health report
pub const LANGUAGE: &str = "Rust";

/// Returns the first 7 characters of the git SHA, or `"unknown"`
pub fn git_sha_short() -> &'static str {
    match GIT_SHA {
        Some(sha) if sha.len() >= 7 && sha.is_char_boundary(7) => &sha[..7],
        Some(sha) if !sha.is_empty() => sha,
        _ => "unknown",
    }
}

/// Returns the runtime version string
///
/// Format: `{rustc_semver} ({target_triple})`
/// Example: `1.85.0 (x86_64-unknown-linux-gnu)`
pub fn runtime_version() -> String {
    format!("{} ({})", RUSTC_SEMVER, CARGO_TARGET_TRIPLE)
}

/// Returns a detailed build info string, logged at startup
pub fn detailed_info() -> String {
    format!(
        "{}\nBuilt: {}\nGit: {}@{}\nTarget: {}\nOptimization: {}\nRustc: {} ({})",
        env!("CARGO_PKG_VERSION"),
        BUILD_TIMESTAMP,
        GIT_BRANCH.unwrap_or("unknown"),
        git_sha_short(),
        CARGO_TARGET_TRIPLE,
        CARGO_OPT_LEVEL,
        RUSTC_SEMVER,
        RUSTC_CHANNEL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_version_mentions_target() {
        let version = runtime_version();
        assert!(version.starts_with(RUSTC_SEMVER));
        assert!(version.contains(CARGO_TARGET_TRIPLE));
    }

    #[test]
    fn test_git_sha_short_is_bounded() {
        assert!(!git_sha_short().is_empty());
        assert!(git_sha_short().len() <= 7);
    }
}
