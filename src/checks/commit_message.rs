//! Commit message check
//!
//! Validates the commit subject line against a configured pattern
//! (Conventional Commits by default). Git hands the message file path
//! to the commit-msg hook; comment lines are ignored when locating the
//! subject.

use super::{CheckResult, Finding};
use crate::cli::Output;
use crate::config::CommitMessageConfig;
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;

pub const NAME: &str = "commit-message";

pub fn run(config: &CommitMessageConfig, msg_path: &Path, output: &Output) -> Result<CheckResult> {
    if !config.enabled {
        return Ok(CheckResult::clean(NAME));
    }

    if !msg_path.exists() {
        output.warning("No commit message file found, skipping validation");
        return Ok(CheckResult::clean(NAME));
    }

    let message = std::fs::read_to_string(msg_path)
        .with_context(|| format!("Failed to read commit message: {}", msg_path.display()))?;

    let mut result = CheckResult::new(NAME, config.block_commit);
    if let Some(finding) = validate_message(&message, config)? {
        result.findings.push(finding);
        result.tips.push(config.message.clone());
        for example in &config.examples {
            result.tips.push(format!("Example: {example}"));
        }
    }

    Ok(result)
}

/// Check a full commit message against the config; `None` means it
/// passes. The subject is the first non-empty, non-comment line.
pub fn validate_message(
    message: &str,
    config: &CommitMessageConfig,
) -> Result<Option<Finding>> {
    let subject = message
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'));

    let Some(subject) = subject else {
        return Ok(Some(Finding::message(
            "commit message".to_string(),
            "Commit message cannot be empty".to_string(),
        )));
    };

    let pattern = Regex::new(&config.pattern).context("Invalid commit_message pattern")?;
    if pattern.is_match(subject) {
        return Ok(None);
    }

    Ok(Some(Finding::message(
        subject.to_string(),
        format!("Commit subject \"{subject}\" does not match the required format"),
    )))
}
