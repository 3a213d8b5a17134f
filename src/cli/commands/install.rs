//! Install commitgate hooks into the repository
//!
//! Writes an executable script per supported hook into `.git/hooks`.
//! Hooks written by something else are left alone unless --force is
//! given.

use crate::cli::Output;
use crate::git::GitOperations;
use crate::hooks::{hook_script, is_commitgate_hook, HOOK_NAMES};
use anyhow::Result;

/// Execute the install command
pub async fn execute(force: bool, output: &Output) -> Result<()> {
    output.header("Installing commitgate hooks");

    let git = GitOperations::discover()?;
    let mut installed = 0;

    for hook in HOOK_NAMES {
        if git.hook_exists(hook) {
            let owned = git.read_hook(hook).is_some_and(|c| is_commitgate_hook(&c));
            if !owned && !force {
                output.warning(&format!(
                    "{hook} hook already exists and was not written by commitgate, skipping (use --force to overwrite)"
                ));
                continue;
            }
        }

        git.install_hook(hook, &hook_script(hook))?;
        output.success(&format!("Installed {hook} hook"));
        installed += 1;
    }

    if installed > 0 {
        output.blank_line();
        output.info("Customize checks in commitgate.toml (commitgate config init)");
        output.info("Test with: git add . && git commit -m \"test: hooks\"");
    }

    Ok(())
}
