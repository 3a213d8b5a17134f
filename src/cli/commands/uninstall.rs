//! Remove commitgate hooks from the repository
//!
//! Only hooks written by commitgate are removed; anything else in
//! `.git/hooks` is left untouched.

use crate::cli::Output;
use crate::git::GitOperations;
use crate::hooks::{is_commitgate_hook, HOOK_NAMES};
use anyhow::Result;

/// Execute the uninstall command
pub async fn execute(output: &Output) -> Result<()> {
    output.header("Removing commitgate hooks");

    let git = GitOperations::discover()?;

    for hook in HOOK_NAMES {
        match git.read_hook(hook) {
            Some(content) if is_commitgate_hook(&content) => {
                git.remove_hook(hook)?;
                output.success(&format!("Removed {hook} hook"));
            }
            Some(_) => {
                output.warning(&format!("{hook} hook was not written by commitgate, keeping it"));
            }
            None => {
                output.verbose(&format!("{hook} hook not installed"));
            }
        }
    }

    Ok(())
}
