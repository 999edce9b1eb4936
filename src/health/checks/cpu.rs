//! CPU-bound synthetic check

use crate::health::check::{CheckResult, SystemCheck};

/// Upper bound of the summed range
pub const CPU_TEST_LIMIT: u64 = 1_000_000;

/// Sums the squares of `1..=n`
///
/// The accumulator is 64-bit: the result for [`CPU_TEST_LIMIT`] is about
/// 3.3e17, far beyond `u32`.
pub fn sum_of_squares(n: u64) -> u64 {
    (1..=n).map(|k| k * k).sum()
}

/// Burns a fixed amount of CPU and reports the result
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuCheck;

impl CpuCheck {
    pub fn new() -> Self {
        Self
    }
}

impl SystemCheck for CpuCheck {
    fn name(&self) -> &'static str {
        "CPU Test"
    }

    fn check(&self) -> CheckResult {
        CheckResult::pass(format!("Sum: {}", sum_of_squares(CPU_TEST_LIMIT)))
    }
}
