//! Commit message hook implementation
//!
//! Git invokes commit-msg with the path of the message file; without an
//! argument the conventional `.git/COMMIT_EDITMSG` location is used.

use super::HookContext;
use crate::checks::{self, commit_message};
use crate::cli::Output;
use anyhow::Result;
use std::path::PathBuf;

/// Execute the commit-msg hook
pub async fn execute(context: HookContext, output: &Output) -> Result<()> {
    let msg_path = match context.args.first() {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir()?.join(".git/COMMIT_EDITMSG"),
    };

    let result = commit_message::run(&context.config.checks.commit_message, &msg_path, output)?;
    checks::report(&result, &context.config.notifications, output);

    if result.should_block() {
        anyhow::bail!("Commit message validation failed");
    }

    if result.has_findings() {
        // Non-blocking configuration: visibility without blocking.
        return Ok(());
    }

    output.success("Commit message validation passed");
    Ok(())
}
