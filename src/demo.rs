//! Language feature demo
//!
//! Independent of the health report. Shows iterator pipelines over a small
//! record type and exhaustive matching on an optional value.

use chrono::Utc;
use colored::Colorize;

/// A number together with its square and cube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStats {
    pub value: u64,
    pub square: u64,
    pub cube: u64,
}

impl NumberStats {
    pub fn new(value: u64) -> Self {
        Self {
            value,
            square: value * value,
            cube: value * value * value,
        }
    }
}

/// Stats for `1..=n`
pub fn number_stats(n: u64) -> Vec<NumberStats> {
    (1..=n).map(NumberStats::new).collect()
}

/// Squares of the records whose base value is even
pub fn even_squares(stats: &[NumberStats]) -> Vec<u64> {
    stats
        .iter()
        .filter(|s| s.value % 2 == 0)
        .map(|s| s.square)
        .collect()
}

/// `Some("value")` when the millisecond reading is even, otherwise `None`
pub fn optional_value(millis: i64) -> Option<&'static str> {
    (millis % 2 == 0).then_some("value")
}

/// Renders an optional value the way the demo prints it
pub fn describe_optional(value: Option<&str>) -> String {
    match value {
        Some(v) => v.to_uppercase(),
        None => "NULL".to_string(),
    }
}

/// Formats the demo using the current clock for the optional-value line
pub fn format_demo() -> String {
    format_demo_at(Utc::now().timestamp_millis())
}

/// Formats the demo for a given millisecond clock reading
pub fn format_demo_at(millis: i64) -> String {
    let stats = number_stats(5);
    let mut output = format!("\n{}\n", "🧮 Rust Features Demo:".bold());

    output.push_str("   Numbers with squares and cubes:\n");
    for s in &stats {
        output.push_str(&format!(
            "     {} -> square: {}, cube: {}\n",
            s.value, s.square, s.cube
        ));
    }

    output.push_str(&format!(
        "   Even number squares: {:?}\n",
        even_squares(&stats)
    ));
    output.push_str(&format!(
        "   Optional value demo: {}\n",
        describe_optional(optional_value(millis))
    ));

    output
}
