//! Health report data model
//!
//! A [`HealthReport`] is assembled once per run and never mutated. Field
//! names serialize to the camelCase JSON schema consumed by tooling.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::build_info;
use crate::host::HostInfo;
use crate::timer::Timer;

/// Service name reported for this binary
pub const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

/// Status reported for every completed run
pub const STATUS_HEALTHY: &str = "healthy";

/// Memory counters in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryInfo {
    pub total_memory: u64,
    pub free_memory: u64,
    pub used_memory: u64,
    pub max_memory: u64,
}

impl MemoryInfo {
    /// Builds a snapshot from raw counters, enforcing `free <= total <= max`
    pub fn from_counters(total: u64, free: u64, max: u64) -> Self {
        let free = free.min(total);
        Self {
            total_memory: total,
            free_memory: free,
            used_memory: total - free,
            max_memory: max.max(total),
        }
    }
}

/// Host snapshot embedded in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub os: String,
    /// Serialized as `jvmVersion`, the key existing consumers read
    #[serde(rename = "jvmVersion")]
    pub runtime_version: String,
    pub memory_usage: MemoryInfo,
}

impl SystemInfo {
    /// Samples the host once
    pub fn capture(host: &dyn HostInfo) -> Self {
        Self {
            os: host.os_name(),
            runtime_version: host.runtime_version(),
            memory_usage: host.memory_stats(),
        }
    }
}

/// The single structured snapshot produced per run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub service: String,
    pub status: String,
    /// ISO-8601 timestamp of report assembly
    pub timestamp: String,
    pub language: String,
    pub version: String,
    /// Time since process start, e.g. `"12ms"`
    pub uptime: String,
    pub system: SystemInfo,
}

impl HealthReport {
    /// Assembles the report from a previously captured host snapshot
    pub fn assemble(system: SystemInfo, timer: &Timer) -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            status: STATUS_HEALTHY.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            language: build_info::LANGUAGE.to_string(),
            version: build_info::RUSTC_SEMVER.to_string(),
            uptime: timer.uptime(),
            system,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::host::tests::FixedHost;

    #[test]
    fn test_from_counters_derives_used() {
        let memory = MemoryInfo::from_counters(1000, 300, 4000);
        assert_eq!(memory.used_memory, 700);
        assert_eq!(memory.max_memory, 4000);
    }

    #[test]
    fn test_from_counters_clamps_inconsistent_samples() {
        let memory = MemoryInfo::from_counters(1000, 1500, 10);
        assert_eq!(memory.free_memory, 1000);
        assert_eq!(memory.used_memory, 0);
        assert_eq!(memory.max_memory, 1000);
    }

    #[test]
    fn test_assemble_fills_constants() {
        let system = SystemInfo::capture(&FixedHost::default());
        let report = HealthReport::assemble(system, &Timer::start());

        assert_eq!(report.service, SERVICE_NAME);
        assert_eq!(report.status, "healthy");
        assert_eq!(report.language, "Rust");
        assert_eq!(report.system.os, "TestOS 1.0");
        assert!(report.uptime.ends_with("ms"));
        assert!(DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
    }

    #[test]
    fn test_serialized_field_names() {
        let system = SystemInfo::capture(&FixedHost::default());
        let report = HealthReport::assemble(system, &Timer::start());
        let value = serde_json::to_value(&report).unwrap();

        for key in ["service", "status", "timestamp", "language", "version", "uptime"] {
            assert!(value[key].is_string(), "missing {key}");
        }
        assert!(value["system"]["jvmVersion"].is_string());
        let memory = &value["system"]["memoryUsage"];
        assert_eq!(memory["totalMemory"], 512 * 1024 * 1024);
        assert_eq!(memory["freeMemory"], 200 * 1024 * 1024);
        assert_eq!(memory["usedMemory"], 312 * 1024 * 1024);
        assert_eq!(memory["maxMemory"], 1024 * 1024 * 1024);
    }
}
