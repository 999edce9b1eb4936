//! Formatting and reporting for health check results

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Columns},
};

use super::runner::HealthCheckReport;
use crate::error::Result;
use crate::report::{HealthReport, MemoryInfo};

/// Converts bytes to whole mebibytes, truncating
pub fn to_mb(bytes: u64) -> u64 {
    bytes / 1024 / 1024
}

/// Formats one line per check, in execution order
pub fn format_checks(report: &HealthCheckReport) -> String {
    let mut output = format!("\n{}\n", "🔍 Performing Health Checks...".bold());

    for (name, result) in &report.results {
        output.push_str(&format!(
            "   {}... {} ({})\n",
            name,
            result.status.as_colored_str(),
            result.summary
        ));
    }

    output
}

/// Formats the console report
///
/// `execution_ms` is the duration of the check suite, which is distinct from
/// the process uptime carried in the report.
pub fn format_report(report: &HealthReport, execution_ms: u64) -> String {
    let ok = "✅".green();
    let mut output = format!("\n{}\n", "📊 Health Check Results:".bold());

    output.push_str(&format!("{} Service: {}\n", ok, report.service));
    output.push_str(&format!("{} Status: {}\n", ok, report.status));
    output.push_str(&format!(
        "{} Language: {} {}\n",
        ok, report.language, report.version
    ));
    output.push_str(&format!("{} OS: {}\n", ok, report.system.os));
    output.push_str(&format!("{} Runtime: {}\n", ok, report.system.runtime_version));
    output.push_str(&format!("{} Execution Time: {}ms\n", ok, execution_ms));

    output.push_str(&format!("\n{}\n", "💾 Memory Usage:".bold()));
    output.push_str(&format_memory(&report.system.memory_usage));

    output
}

/// Formats memory counters as an aligned table in MB
fn format_memory(memory: &MemoryInfo) -> String {
    let mut builder = Builder::default();
    for (label, bytes) in [
        ("Used:", memory.used_memory),
        ("Free:", memory.free_memory),
        ("Total:", memory.total_memory),
        ("Max:", memory.max_memory),
    ] {
        builder.push_record([label.to_string(), format!("{} MB", to_mb(bytes))]);
    }

    let mut table = builder.build();
    table
        .with(Style::blank())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    let mut output = String::new();
    for line in table.to_string().lines() {
        output.push_str("  ");
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// Serializes the report as pretty-printed JSON
pub fn format_json(report: &HealthReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Formats the JSON section printed after the console report
pub fn format_json_section(report: &HealthReport) -> Result<String> {
    Ok(format!(
        "\n{}\n{}\n",
        "📋 JSON Output:".bold(),
        format_json(report)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::check::CheckResult;
    use crate::host::tests::FixedHost;
    use crate::report::SystemInfo;
    use crate::timer::Timer;

    fn sample_report() -> HealthReport {
        colored::control::set_override(false);
        HealthReport::assemble(SystemInfo::capture(&FixedHost::default()), &Timer::start())
    }

    #[test]
    fn test_to_mb_truncates() {
        assert_eq!(to_mb(0), 0);
        assert_eq!(to_mb(1024 * 1024 - 1), 0);
        assert_eq!(to_mb(3 * 1024 * 1024 + 1024 * 1023), 3);
    }

    #[test]
    fn test_console_lines_in_order() {
        let report = sample_report();
        let text = format_report(&report, 7);

        let order = [
            "Service: healthcheck",
            "Status: healthy",
            "Language: Rust",
            "OS: TestOS 1.0",
            "Runtime: 1.0.0 (test-target)",
            "Execution Time: 7ms",
            "Memory Usage:",
        ];
        let positions: Vec<_> = order
            .iter()
            .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_memory_section_in_mb() {
        let text = format_report(&sample_report(), 0);
        let memory = &text[text.find("Memory Usage:").unwrap()..];

        let lines: Vec<_> = memory.lines().skip(1).collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Used:") && lines[0].ends_with("312 MB"));
        assert!(lines[1].contains("Free:") && lines[1].ends_with("200 MB"));
        assert!(lines[2].contains("Total:") && lines[2].ends_with("512 MB"));
        assert!(lines[3].contains("Max:") && lines[3].ends_with("1024 MB"));
    }

    #[test]
    fn test_check_lines() {
        colored::control::set_override(false);
        let report = HealthCheckReport {
            results: vec![
                ("CPU Test".to_string(), CheckResult::pass("Sum: 14")),
                ("Memory Test".to_string(), CheckResult::warn("odd")),
            ],
            elapsed: std::time::Duration::ZERO,
            passed: 1,
            warned: 1,
        };

        let text = format_checks(&report);
        assert!(text.contains("   CPU Test... ✅ (Sum: 14)\n"));
        assert!(text.contains("   Memory Test... ⚠ (odd)\n"));
    }

    #[test]
    fn test_json_section_parses() {
        let report = sample_report();
        let section = format_json_section(&report).unwrap();
        let json = &section[section.find('{').unwrap()..];

        let value: serde_json::Value = serde_json::from_str(json.trim()).unwrap();
        assert_eq!(value["status"], "healthy");
        assert_eq!(value["system"]["memoryUsage"]["usedMemory"], 312 * 1024 * 1024);
    }
}
