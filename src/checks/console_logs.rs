//! Console-statement check
//!
//! The canonical instance of the line scanner: finds leftover
//! `console.*(` calls in staged files, with an allow-list for
//! deliberate logging (eslint-disable markers, logger frameworks).

use super::line_scanner::LineScanner;
use super::CheckResult;
use crate::cli::Output;
use crate::config::{ConsoleLogsConfig, PerformanceConfig};
use anyhow::Result;

pub const NAME: &str = "console-logs";

pub fn run(
    config: &ConsoleLogsConfig,
    perf: &PerformanceConfig,
    files: &[String],
    output: &Output,
) -> Result<CheckResult> {
    if !config.enabled {
        return Ok(CheckResult::clean(NAME));
    }

    let scanner = LineScanner::new(&config.patterns, &config.allowed_patterns)?;

    let mut result = CheckResult::new(NAME, config.block_commit);
    result.findings = scanner.scan_files(files, perf, output);

    if result.has_findings() {
        result.tips.push(
            "Remove console statements or add them to allowed_patterns in commitgate.toml"
                .to_string(),
        );
    }

    Ok(result)
}
