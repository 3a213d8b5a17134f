//! Pre-commit hook implementation
//!
//! Runs the staged-file pipeline: branch naming, console statements,
//! file size, and the external type check, in that order. Explicit file
//! arguments override the git staged-file list so the hook can also be
//! driven by a file-passing hook manager or invoked by hand.

use super::HookContext;
use crate::checks;
use crate::cli::Output;
use crate::external::SystemToolRunner;
use crate::git::GitOperations;
use anyhow::Result;

/// Execute the pre-commit hook
pub async fn execute(context: HookContext, output: &Output) -> Result<()> {
    let files = if context.args.is_empty() {
        staged_files(output)?
    } else {
        context.args.clone()
    };

    if files.is_empty() {
        output.info("No staged files to check");
    } else {
        output.verbose(&format!("Checking {} staged file(s)", files.len()));
    }

    let project_dir = std::env::current_dir()?;
    let summary = checks::run_checks(
        &context.config,
        &files,
        &project_dir,
        &SystemToolRunner,
        output,
    );

    if !summary.passed() {
        anyhow::bail!("Pre-commit checks failed");
    }

    output.success("All pre-commit checks passed");
    Ok(())
}

fn staged_files(output: &Output) -> Result<Vec<String>> {
    match GitOperations::discover() {
        Ok(git) => git.staged_files(),
        Err(e) => {
            // Without a repository or explicit file arguments there is
            // nothing to scan; the metadata checks still run.
            output.warning(&format!("Could not list staged files: {e}"));
            Ok(Vec::new())
        }
    }
}
