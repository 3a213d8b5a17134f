//! Branch naming check
//!
//! Validates the current branch name against a configured pattern.
//! Long-lived branches are exempt via `allowed_branches`. Outside a git
//! repository the check is skipped with a warning.

use super::{CheckResult, Finding};
use crate::cli::Output;
use crate::config::BranchNamingConfig;
use crate::git::GitOperations;
use anyhow::{Context, Result};
use regex::Regex;

pub const NAME: &str = "branch-naming";

pub fn run(config: &BranchNamingConfig, output: &Output) -> Result<CheckResult> {
    if !config.enabled {
        return Ok(CheckResult::clean(NAME));
    }

    let branch = match GitOperations::discover().and_then(|git| git.current_branch()) {
        Ok(branch) => branch,
        Err(e) => {
            output.warning(&format!("Skipping branch name check: {e}"));
            return Ok(CheckResult::clean(NAME));
        }
    };

    let mut result = CheckResult::new(NAME, config.block_commit);
    if let Some(finding) = validate_branch(&branch, config)? {
        result.findings.push(finding);
        result.tips.push(config.message.clone());
    }

    Ok(result)
}

/// Check one branch name against the config; `None` means it passes
pub fn validate_branch(branch: &str, config: &BranchNamingConfig) -> Result<Option<Finding>> {
    if config.allowed_branches.iter().any(|allowed| allowed == branch) {
        return Ok(None);
    }

    let pattern = Regex::new(&config.pattern).context("Invalid branch_naming pattern")?;
    if pattern.is_match(branch) {
        return Ok(None);
    }

    Ok(Some(Finding::message(
        branch.to_string(),
        format!("Branch name \"{branch}\" does not match the required pattern"),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_branches_pass_without_matching_the_pattern() {
        let config = BranchNamingConfig::default();
        assert!(validate_branch("main", &config).unwrap().is_none());
        assert!(validate_branch("develop", &config).unwrap().is_none());
    }

    #[test]
    fn conventional_branch_names_pass() {
        let config = BranchNamingConfig::default();
        assert!(validate_branch("feature/add-login", &config).unwrap().is_none());
        assert!(validate_branch("bugfix/issue-123", &config).unwrap().is_none());
        assert!(validate_branch("hotfix/rollback-v2", &config).unwrap().is_none());
    }

    #[test]
    fn unconventional_branch_names_are_findings() {
        let config = BranchNamingConfig::default();
        assert!(validate_branch("my-cool-branch", &config).unwrap().is_some());
        assert!(validate_branch("feature/Add_Login", &config).unwrap().is_some());
        assert!(validate_branch("wip", &config).unwrap().is_some());
    }

    #[test]
    fn invalid_pattern_is_a_configuration_error() {
        let config = BranchNamingConfig { pattern: "(unclosed".to_string(), ..Default::default() };
        assert!(validate_branch("feature/x", &config).is_err());
    }
}
