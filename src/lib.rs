//! # Commitgate - Pre-commit Validation Pipeline
//!
//! A fast pre-commit validation pipeline written in Rust. Commitgate installs
//! git hooks that run a set of independent, individually configurable checks
//! against the staged file list and gate the commit on the aggregate result.
//!
//! ## Features
//!
//! - **Declarative checks**: every check carries `enabled` and `block_commit`
//!   flags; non-blocking checks still report their findings
//! - **Console-statement scanning**: regex line scanner with allow-list and
//!   commented-code suppression
//! - **File-size limits**: per-extension and per-category size policies with
//!   human-readable size specs ("2mb", "500kb")
//! - **External tool delegation**: type checking via `npx tsc` as an opaque
//!   subprocess with a hard timeout
//! - **Branch and commit-message validation**: pattern checks for branch
//!   names and Conventional Commits
//!
//! ## Quick Start
//!
//! ```bash
//! # Install commitgate hooks in your repository
//! commitgate install
//!
//! # Run the staged-file pipeline by hand
//! commitgate check
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod external;
pub mod git;
pub mod hooks;
pub mod parallel;
pub mod size;

pub use cli::{Cli, Output};
pub use config::CommitgateConfig;

/// Result type alias for commitgate operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
