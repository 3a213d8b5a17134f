//! Check orchestration for commitgate
//!
//! Every check is an independent filter over the staged file list (or
//! commit metadata), declared in configuration with `enabled` and
//! `block_commit` flags. The orchestrator runs the enabled checks in a
//! fixed order, prints findings for every check that has them, and
//! derives the exit decision: the pipeline fails iff some enabled check
//! both found a violation and blocks.

pub mod branch_naming;
pub mod commit_message;
pub mod console_logs;
pub mod file_size;
pub mod line_scanner;
pub mod typescript;

use crate::cli::Output;
use crate::config::{CommitgateConfig, NotificationsConfig};
use crate::external::ToolRunner;
use crate::size::format_bytes;
use anyhow::Result;
use std::path::Path;

/// A single reported violation
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// File the violation was found in (relative to the invocation's
    /// working directory), or another subject such as a branch name
    pub file: String,

    /// 1-based line number, for line-oriented findings
    pub line: Option<usize>,

    /// Trimmed text of the offending line, or a diagnostic message
    pub content: Option<String>,

    /// The exact matched substring, for scanner findings
    pub matched: Option<String>,

    /// Actual size in bytes, for size findings
    pub size: Option<u64>,

    /// Applicable limit in bytes, for size findings
    pub limit: Option<u64>,
}

impl Finding {
    /// A line-oriented scanner finding
    pub fn on_line(file: String, line: usize, content: String, matched: String) -> Self {
        Self {
            file,
            line: Some(line),
            content: Some(content),
            matched: Some(matched),
            size: None,
            limit: None,
        }
    }

    /// An oversized-file finding
    pub fn oversized(file: String, size: u64, limit: u64) -> Self {
        Self { file, line: None, content: None, matched: None, size: Some(size), limit: Some(limit) }
    }

    /// A free-form finding (failed delegate, bad branch name or message)
    pub fn message(subject: String, message: String) -> Self {
        Self {
            file: subject,
            line: None,
            content: Some(message),
            matched: None,
            size: None,
            limit: None,
        }
    }
}

/// Result of running one check, created fresh per invocation
#[derive(Debug)]
pub struct CheckResult {
    pub name: &'static str,
    pub findings: Vec<Finding>,

    /// The check's `block_commit` flag
    pub blocks: bool,

    /// Tips printed alongside findings (suppressed by notifications config)
    pub tips: Vec<String>,
}

impl CheckResult {
    pub fn new(name: &'static str, blocks: bool) -> Self {
        Self { name, findings: Vec::new(), blocks, tips: Vec::new() }
    }

    /// An empty result for a disabled or skipped check
    pub fn clean(name: &'static str) -> Self {
        Self::new(name, false)
    }

    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Whether this result alone fails the pipeline
    pub fn should_block(&self) -> bool {
        self.has_findings() && self.blocks
    }
}

/// Aggregate outcome of one pipeline invocation
#[derive(Debug, Default)]
pub struct RunSummary {
    pub results: Vec<CheckResult>,

    /// Checks that failed to run at all (configuration or
    /// infrastructure errors). These block regardless of `block_commit`.
    pub failed_checks: Vec<String>,
}

impl RunSummary {
    /// The overall gate: true iff no blocking violation and no
    /// failed-to-run check
    pub fn passed(&self) -> bool {
        self.failed_checks.is_empty() && !self.results.iter().any(|r| r.should_block())
    }
}

/// Run the staged-file checks in their documented order: branch naming,
/// console statements, file size, then the external type check. Errors
/// in one check never prevent the others from running.
pub fn run_checks(
    config: &CommitgateConfig,
    files: &[String],
    project_dir: &Path,
    runner: &dyn ToolRunner,
    output: &Output,
) -> RunSummary {
    let mut summary = RunSummary::default();

    let branch = branch_naming::run(&config.checks.branch_naming, output);
    record(&mut summary, branch_naming::NAME, branch, config, output);

    let console =
        console_logs::run(&config.checks.console_logs, &config.performance, files, output);
    record(&mut summary, console_logs::NAME, console, config, output);

    let sizes = file_size::run(&config.checks.file_size, files, output);
    record(&mut summary, file_size::NAME, sizes, config, output);

    let types = typescript::run(
        &config.checks.typescript,
        &config.performance,
        project_dir,
        runner,
        output,
    );
    record(&mut summary, typescript::NAME, types, config, output);

    summary
}

fn record(
    summary: &mut RunSummary,
    name: &'static str,
    outcome: Result<CheckResult>,
    config: &CommitgateConfig,
    output: &Output,
) {
    match outcome {
        Ok(result) => {
            report(&result, &config.notifications, output);
            summary.results.push(result);
        }
        Err(e) => {
            // Failed-to-run is not "violation found"; it blocks
            // regardless of block_commit so misconfiguration can't
            // silently pass.
            output.error(&format!("{name} check failed to run: {e:#}"));
            summary.failed_checks.push(name.to_string());
        }
    }
}

/// Print a check's findings and tips, honoring the notifications config.
/// Non-blocking findings are still printed: visibility without blocking.
pub fn report(result: &CheckResult, notifications: &NotificationsConfig, output: &Output) {
    if !result.has_findings() {
        tracing::debug!(check = result.name, "check passed");
        return;
    }

    if !notifications.enabled {
        return;
    }

    if notifications.show_errors {
        output.error(&format!("{} found {} issue(s):", result.name, result.findings.len()));
        for finding in &result.findings {
            match finding.line {
                Some(line) => {
                    output.file_location(&finding.file, line);
                    if let Some(content) = &finding.content {
                        output.indent(content);
                    }
                    if let Some(matched) = &finding.matched {
                        output.indent(&format!("Found: {matched}"));
                    }
                }
                None => match (finding.size, finding.limit) {
                    (Some(size), Some(limit)) => {
                        output.list_item(&finding.file);
                        output.indent(&format!(
                            "Size: {} (Max: {})",
                            format_bytes(size, 2),
                            format_bytes(limit, 2)
                        ));
                    }
                    _ => {
                        output.list_item(&finding.file);
                        if let Some(content) = &finding.content {
                            output.indent(content);
                        }
                    }
                },
            }
        }
    }

    if notifications.show_tips {
        for tip in &result.tips {
            output.tip(tip);
        }
    }

    if !result.blocks && notifications.show_warnings {
        output.warning(&format!("{} issues reported but not blocking the commit", result.name));
    }
}

/// Render a path relative to the current working directory for display
pub(crate) fn relative_to_cwd(path: &str) -> String {
    match std::env::current_dir() {
        Ok(cwd) => Path::new(path)
            .strip_prefix(&cwd)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| path.to_string()),
        Err(_) => path.to_string(),
    }
}
