//! Allocation synthetic check

use crate::health::check::{CheckResult, SystemCheck};

/// Number of integers materialized by the check
pub const MEMORY_TEST_LEN: u32 = 100_000;

/// Collects `1..=len` into a vector
pub fn allocate_sequence(len: u32) -> Vec<u32> {
    (1..=len).collect()
}

/// Allocates a vector of sequential integers and reports its length
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryCheck;

impl MemoryCheck {
    pub fn new() -> Self {
        Self
    }
}

impl SystemCheck for MemoryCheck {
    fn name(&self) -> &'static str {
        "Memory Test"
    }

    fn check(&self) -> CheckResult {
        let items = allocate_sequence(MEMORY_TEST_LEN);
        CheckResult::pass(format!("Created list of {} items", items.len()))
    }
}
