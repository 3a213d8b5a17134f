//! Git hook entry points
//!
//! Each supported hook has its own module; `execute` dispatches by hook
//! name. The installed hook scripts call back into the binary with the
//! arguments git provides, so the staged-file contract matches what a
//! hook manager like husky would pass to per-check scripts.

pub mod commit_msg;
pub mod pre_commit;

use crate::cli::Output;
use crate::config::CommitgateConfig;
use anyhow::Result;

/// Hooks commitgate installs and understands
pub const HOOK_NAMES: &[&str] = &["pre-commit", "commit-msg"];

/// Context passed to every hook invocation
pub struct HookContext {
    /// Immutable configuration, loaded once per invocation
    pub config: CommitgateConfig,

    /// Arguments git passed to the hook (file paths for pre-commit
    /// overrides, the message file path for commit-msg)
    pub args: Vec<String>,
}

/// Execute a hook by name
pub async fn execute(hook: &str, context: HookContext, output: &Output) -> Result<()> {
    tracing::debug!(hook, "running hook");
    match hook {
        "pre-commit" => pre_commit::execute(context, output).await,
        "commit-msg" => commit_msg::execute(context, output).await,
        other => anyhow::bail!(
            "Unknown hook \"{other}\" (supported: {})",
            HOOK_NAMES.join(", ")
        ),
    }
}

/// Shell script body installed into `.git/hooks/<hook>`
pub fn hook_script(hook: &str) -> String {
    format!(
        "#!/bin/sh\n\
         # Installed by commitgate. Edit commitgate.toml, not this file.\n\
         exec commitgate run {hook} \"$@\"\n"
    )
}

/// Whether an existing hook file was written by commitgate
pub fn is_commitgate_hook(content: &str) -> bool {
    content.contains("commitgate run")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_scripts_delegate_to_the_binary() {
        let script = hook_script("pre-commit");
        assert!(script.starts_with("#!/bin/sh"));
        assert!(script.contains("commitgate run pre-commit \"$@\""));
        assert!(is_commitgate_hook(&script));
    }

    #[test]
    fn foreign_hooks_are_recognized() {
        assert!(!is_commitgate_hook("#!/bin/sh\nnpm test\n"));
    }
}
