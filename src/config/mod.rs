//! Configuration management for commitgate
//!
//! This module defines the typed configuration for every check plus the
//! notification and performance settings, and loads it as a layered merge
//! over documented defaults: defaults → `commitgate.toml` → `COMMITGATE_*`
//! environment variables. A partial file only overrides the fields it
//! names; everything else keeps its default.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A size limit, either a raw byte count or a human-readable string
/// such as `"2mb"` or `"500kb"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    Bytes(u64),
    Text(String),
}

/// Main configuration structure for commitgate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitgateConfig {
    /// Per-check configuration
    pub checks: ChecksConfig,

    /// Operator-facing reporting settings
    pub notifications: NotificationsConfig,

    /// Parallelism and subprocess timeout settings
    pub performance: PerformanceConfig,
}

/// Configuration for all checks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    pub console_logs: ConsoleLogsConfig,
    pub file_size: FileSizeConfig,
    pub typescript: TypescriptConfig,
    pub branch_naming: BranchNamingConfig,
    pub commit_message: CommitMessageConfig,
}

/// Console-statement scanner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleLogsConfig {
    pub enabled: bool,
    pub block_commit: bool,

    /// Forbidden patterns, tested against every line
    pub patterns: Vec<String>,

    /// A line matching any of these is never a finding
    pub allowed_patterns: Vec<String>,
}

impl Default for ConsoleLogsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            block_commit: false,
            patterns: vec![
                r"console\.(log|debug|info|warn|error|trace|dir|table|time|timeEnd|group|groupEnd)\("
                    .to_string(),
            ],
            allowed_patterns: vec![
                r"// eslint-disable-next-line no-console".to_string(),
                r"/\* eslint-disable no-console \*/".to_string(),
                r"logger\.".to_string(),
                r"winston\.".to_string(),
            ],
        }
    }
}

/// File-size check configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSizeConfig {
    pub enabled: bool,
    pub block_commit: bool,

    /// Size limits keyed by extension (".png"), category ("images",
    /// "videos", "documents") or "default". The "default" entry must
    /// resolve for every file that matches nothing else.
    pub limits: BTreeMap<String, SizeSpec>,
}

impl Default for FileSizeConfig {
    fn default() -> Self {
        let mut limits = BTreeMap::new();
        for (key, value) in [
            ("default", "5mb"),
            ("images", "2mb"),
            (".png", "2mb"),
            (".jpg", "2mb"),
            (".jpeg", "2mb"),
            (".gif", "3mb"),
            (".svg", "500kb"),
            (".ico", "100kb"),
            ("videos", "50mb"),
            ("documents", "10mb"),
            (".pdf", "10mb"),
            (".js", "1mb"),
            (".ts", "1mb"),
            (".css", "500kb"),
        ] {
            limits.insert(key.to_string(), SizeSpec::Text(value.to_string()));
        }

        Self { enabled: true, block_commit: true, limits }
    }
}

/// External type-check delegation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypescriptConfig {
    pub enabled: bool,

    /// Pass `--strict` to the compiler
    pub strict: bool,

    /// Pass `--noEmit` to the compiler
    pub no_emit: bool,

    pub block_commit: bool,
}

impl Default for TypescriptConfig {
    fn default() -> Self {
        Self { enabled: false, strict: false, no_emit: true, block_commit: true }
    }
}

/// Branch naming check configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchNamingConfig {
    pub enabled: bool,
    pub block_commit: bool,

    /// Pattern every branch outside `allowed_branches` must match
    pub pattern: String,

    /// Branches exempt from the pattern (long-lived branches)
    pub allowed_branches: Vec<String>,

    /// Guidance shown with a violation
    pub message: String,
}

impl Default for BranchNamingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            block_commit: false,
            pattern:
                r"^(main|master|develop|staging|production|feature|bugfix|hotfix|release|chore)/[a-z0-9-]+$"
                    .to_string(),
            allowed_branches: vec![
                "main".to_string(),
                "master".to_string(),
                "develop".to_string(),
                "staging".to_string(),
                "production".to_string(),
            ],
            message:
                "Branch name should follow the pattern: type/description (e.g., feature/add-login)"
                    .to_string(),
        }
    }
}

/// Commit message check configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitMessageConfig {
    pub enabled: bool,
    pub block_commit: bool,

    /// Pattern the commit subject line must match
    pub pattern: String,

    /// Guidance shown with a violation
    pub message: String,

    /// Example messages shown as tips with a violation
    pub examples: Vec<String>,
}

impl Default for CommitMessageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            block_commit: true,
            pattern:
                r"^(feat|fix|docs|style|refactor|perf|test|build|ci|chore|revert)(\(.+\))?: .{1,100}$"
                    .to_string(),
            message: "Commit message must follow Conventional Commits format".to_string(),
            examples: vec![
                "feat: add user authentication".to_string(),
                "fix(api): resolve memory leak in data processing".to_string(),
                "docs: update README with installation steps".to_string(),
            ],
        }
    }
}

/// Operator-facing reporting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub enabled: bool,
    pub show_tips: bool,
    pub show_warnings: bool,
    pub show_errors: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { enabled: true, show_tips: true, show_warnings: true, show_errors: true }
    }
}

/// Parallelism and timeout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Fan file scanning out across worker threads
    pub parallel: bool,

    /// Worker cap for parallel scanning (0 = number of CPUs)
    pub max_workers: usize,

    /// Hard timeout for delegated external tools, in milliseconds
    pub timeout: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self { parallel: true, max_workers: 4, timeout: 60_000 }
    }
}

impl CommitgateConfig {
    /// Load configuration, layering an explicit or discovered
    /// `commitgate.toml` and `COMMITGATE_*` environment variables over
    /// the built-in defaults.
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(CommitgateConfig::default()));

        match explicit_path {
            Some(path) => {
                figment = figment.merge(Toml::file_exact(path));
            }
            None => {
                if let Some(path) = Self::find_config_file() {
                    tracing::debug!(path = %path.display(), "loading configuration");
                    figment = figment.merge(Toml::file_exact(path));
                }
            }
        }

        figment
            .merge(Env::prefixed("COMMITGATE_").split("__"))
            .extract()
            .context("Failed to load commitgate configuration")
    }

    /// Find `commitgate.toml` in the current directory or any parent
    pub fn find_config_file() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            for name in ["commitgate.toml", ".commitgate.toml"] {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Eagerly validate everything that is checkable without running:
    /// regex patterns compile, every size spec parses, and a default
    /// size limit exists. Normal check runs defer this to first use.
    pub fn validate(&self) -> Result<()> {
        for pattern in self
            .checks
            .console_logs
            .patterns
            .iter()
            .chain(self.checks.console_logs.allowed_patterns.iter())
        {
            regex::Regex::new(pattern)
                .with_context(|| format!("Invalid console_logs pattern: {pattern}"))?;
        }

        regex::Regex::new(&self.checks.branch_naming.pattern)
            .context("Invalid branch_naming pattern")?;
        regex::Regex::new(&self.checks.commit_message.pattern)
            .context("Invalid commit_message pattern")?;

        if !self.checks.file_size.limits.contains_key("default") {
            anyhow::bail!("file_size limits must include a \"default\" entry");
        }
        for (key, spec) in &self.checks.file_size.limits {
            crate::size::parse_size(spec)
                .with_context(|| format!("Invalid size limit for \"{key}\""))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
