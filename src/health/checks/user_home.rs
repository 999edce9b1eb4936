//! User home directory lookup

use crate::health::check::{CheckResult, SystemCheck};
use crate::host::{HostInfo, UNKNOWN};

/// Reports the current user's home directory without touching it
#[derive(Debug, Clone)]
pub struct UserHomeCheck<H> {
    host: H,
}

impl<H: HostInfo> UserHomeCheck<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }
}

impl<H: HostInfo> SystemCheck for UserHomeCheck<H> {
    fn name(&self) -> &'static str {
        "System Properties Test"
    }

    fn check(&self) -> CheckResult {
        match self.host.home_dir() {
            Some(home) => CheckResult::pass(format!("User home: {}", home)),
            None => CheckResult::warn(format!("User home: {}", UNKNOWN)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::check::CheckStatus;
    use crate::host::tests::FixedHost;

    #[test]
    fn test_reports_home_dir() {
        let result = UserHomeCheck::new(FixedHost::default()).check();
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.summary, "User home: /home/tester");
    }

    #[test]
    fn test_missing_home_is_a_warning() {
        let result = UserHomeCheck::new(FixedHost { home: None }).check();
        assert_eq!(result.status, CheckStatus::Warn);
        assert_eq!(result.summary, "User home: unknown");
    }
}
