//! Host introspection
//!
//! [`HostInfo`] isolates every value read from the machine the process runs
//! on. Implementations never fail: anything the host does not expose is
//! replaced by [`UNKNOWN`] or zero.

use std::path::PathBuf;

use sysinfo::System;
use tracing::debug;

use crate::build_info;
use crate::report::MemoryInfo;

/// Placeholder for host values that cannot be determined
pub const UNKNOWN: &str = "unknown";

/// Read-only view of host-exposed process and OS metadata
pub trait HostInfo {
    /// Operating system name
    fn os_name(&self) -> String;

    /// Version string of the runtime executing this program
    fn runtime_version(&self) -> String;

    /// Point-in-time memory counters
    fn memory_stats(&self) -> MemoryInfo;

    /// Designated temporary directory
    fn temp_dir(&self) -> String;

    /// Current user's home directory, `None` when the host has none
    fn home_dir(&self) -> Option<String>;
}

/// [`HostInfo`] backed by `sysinfo` and `dirs`
#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoHost;

impl SysinfoHost {
    pub fn new() -> Self {
        Self
    }
}

impl HostInfo for SysinfoHost {
    fn os_name(&self) -> String {
        System::long_os_version()
            .or_else(System::name)
            .unwrap_or_else(|| std::env::consts::OS.to_string())
    }

    fn runtime_version(&self) -> String {
        build_info::runtime_version()
    }

    fn memory_stats(&self) -> MemoryInfo {
        let mut sys = System::new();
        sys.refresh_memory();

        let total = sys.total_memory();
        let available = sys.available_memory();
        let swap = sys.total_swap();
        debug!(total, available, swap, "Sampled host memory");

        // Physical memory plus swap is the ceiling the process may grow to
        MemoryInfo::from_counters(total, available, total.saturating_add(swap))
    }

    fn temp_dir(&self) -> String {
        path_to_string(std::env::temp_dir())
    }

    fn home_dir(&self) -> Option<String> {
        dirs::home_dir().map(path_to_string)
    }
}

fn path_to_string(path: PathBuf) -> String {
    path.to_string_lossy().into_owned()
}
