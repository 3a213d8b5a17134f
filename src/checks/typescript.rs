//! External type-check delegation
//!
//! Runs the TypeScript compiler as an opaque subprocess through the
//! `ToolRunner` capability. Only the exit status is consulted; the
//! tool's own diagnostics go straight to the operator via inherited
//! stdio. A missing `tsconfig.json` means the project has no type
//! configuration, which is a skip, not an error.

use super::{CheckResult, Finding};
use crate::cli::Output;
use crate::config::{PerformanceConfig, TypescriptConfig};
use crate::external::{ToolOutcome, ToolRunner};
use anyhow::Result;
use std::path::Path;
use std::time::Duration;

pub const NAME: &str = "typescript";

pub fn run(
    config: &TypescriptConfig,
    perf: &PerformanceConfig,
    project_dir: &Path,
    runner: &dyn ToolRunner,
    output: &Output,
) -> Result<CheckResult> {
    if !config.enabled {
        return Ok(CheckResult::clean(NAME));
    }

    if !project_dir.join("tsconfig.json").exists() {
        output.warning("No tsconfig.json found, skipping TypeScript check");
        return Ok(CheckResult::clean(NAME));
    }

    output.step("Running TypeScript type check...");

    let mut args = vec!["tsc".to_string()];
    if config.strict {
        args.push("--strict".to_string());
    }
    if config.no_emit {
        args.push("--noEmit".to_string());
    }

    let timeout = Duration::from_millis(perf.timeout);
    let outcome = runner.run("npx", &args, project_dir, timeout)?;

    let mut result = CheckResult::new(NAME, config.block_commit);
    match outcome {
        ToolOutcome::Exited(0) => {
            output.success("TypeScript check passed");
        }
        ToolOutcome::Exited(code) => {
            result.findings.push(Finding::message(
                "tsconfig.json".to_string(),
                format!("Type check failed (tsc exited with status {code})"),
            ));
            result.tips.push("Fix TypeScript errors before committing".to_string());
        }
        ToolOutcome::TimedOut => {
            anyhow::bail!("Type check timed out after {}ms", perf.timeout);
        }
    }

    Ok(result)
}
