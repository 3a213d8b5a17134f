//! Run a hook by name
//!
//! The entry point the installed hook scripts call back into. Loads
//! configuration once and hands the hook whatever arguments git
//! provided.

use crate::cli::Output;
use crate::config::CommitgateConfig;
use crate::hooks::{self, HookContext};
use anyhow::Result;

/// Execute a named hook with the given arguments
pub async fn execute(
    hook: &str,
    args: Vec<String>,
    config_path: Option<&str>,
    output: &Output,
) -> Result<()> {
    let config = CommitgateConfig::load(config_path)?;
    let context = HookContext { config, args };
    hooks::execute(hook, context, output).await
}
