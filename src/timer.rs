//! Process uptime measurement

use std::time::{Duration, Instant};

/// Records the moment the program started
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts the timer now
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time since [`Timer::start`]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time formatted as whole milliseconds, e.g. `"42ms"`
    pub fn uptime(&self) -> String {
        format_millis(self.elapsed())
    }
}

/// Formats a duration as truncated whole milliseconds with an `ms` suffix
pub fn format_millis(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millis_truncates() {
        assert_eq!(format_millis(Duration::from_micros(1_999)), "1ms");
        assert_eq!(format_millis(Duration::ZERO), "0ms");
        assert_eq!(format_millis(Duration::from_secs(2)), "2000ms");
    }

    #[test]
    fn test_uptime_is_monotonic() {
        let timer = Timer::start();
        let first = timer.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert!(timer.elapsed() > first);
        assert!(timer.uptime().ends_with("ms"));
    }
}
