//! Temporary directory lookup

use crate::health::check::{CheckResult, SystemCheck};
use crate::host::HostInfo;

/// Reports the host's temporary directory without touching it
#[derive(Debug, Clone)]
pub struct FileSystemCheck<H> {
    host: H,
}

impl<H: HostInfo> FileSystemCheck<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }
}

impl<H: HostInfo> SystemCheck for FileSystemCheck<H> {
    fn name(&self) -> &'static str {
        "File System Test"
    }

    fn check(&self) -> CheckResult {
        CheckResult::pass(format!("Temp dir: {}", self.host.temp_dir()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::tests::FixedHost;

    #[test]
    fn test_reports_temp_dir() {
        let result = FileSystemCheck::new(FixedHost::default()).check();
        assert!(result.status.is_pass());
        assert_eq!(result.summary, "Temp dir: /tmp");
    }
}
