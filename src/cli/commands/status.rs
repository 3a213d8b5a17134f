//! Show hook installation and configuration status

use crate::cli::Output;
use crate::config::CommitgateConfig;
use crate::external::SystemToolRunner;
use crate::git::GitOperations;
use crate::hooks::{is_commitgate_hook, HOOK_NAMES};
use anyhow::Result;

/// Execute the status command
pub async fn execute(config_path: Option<&str>, output: &Output) -> Result<()> {
    output.header("Commitgate status");

    match GitOperations::discover() {
        Ok(git) => {
            for hook in HOOK_NAMES {
                let state = match git.read_hook(hook) {
                    Some(content) if is_commitgate_hook(&content) => "installed",
                    Some(_) => "foreign hook present",
                    None => "not installed",
                };
                output.table_row(hook, state);
            }
            if let Ok(branch) = git.current_branch() {
                output.table_row("branch", &branch);
            }
        }
        Err(e) => output.warning(&format!("{e}")),
    }

    match CommitgateConfig::find_config_file() {
        Some(path) => output.table_row("config", &path.display().to_string()),
        None => output.table_row("config", "built-in defaults"),
    }

    let config = CommitgateConfig::load(config_path)?;
    let checks = [
        ("console-logs", config.checks.console_logs.enabled, config.checks.console_logs.block_commit),
        ("file-size", config.checks.file_size.enabled, config.checks.file_size.block_commit),
        ("typescript", config.checks.typescript.enabled, config.checks.typescript.block_commit),
        ("branch-naming", config.checks.branch_naming.enabled, config.checks.branch_naming.block_commit),
        ("commit-message", config.checks.commit_message.enabled, config.checks.commit_message.block_commit),
    ];

    output.blank_line();
    for (name, enabled, blocks) in checks {
        let state = match (enabled, blocks) {
            (false, _) => "disabled",
            (true, true) => "enabled, blocking",
            (true, false) => "enabled, informational",
        };
        output.table_row(name, state);
    }

    if config.checks.typescript.enabled {
        let npx = if SystemToolRunner::available("npx") { "found" } else { "not found" };
        output.table_row("npx", npx);
    }

    Ok(())
}
