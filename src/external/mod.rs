//! External tool delegation
//!
//! Linters, formatters, and type checkers are opaque collaborators: the
//! pipeline only consults their exit status. Delegation goes through the
//! `ToolRunner` capability so check logic stays testable without
//! spawning real processes.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Outcome of a delegated tool invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOutcome {
    /// The tool ran to completion with this exit code
    Exited(i32),
    /// The tool exceeded the configured timeout and was killed
    TimedOut,
}

impl ToolOutcome {
    pub fn success(&self) -> bool {
        matches!(self, ToolOutcome::Exited(0))
    }
}

/// Capability interface for running external tools
pub trait ToolRunner {
    /// Run `program` with `args` in `cwd`, inheriting the caller's
    /// stdio so the tool's own diagnostics reach the operator.
    fn run(&self, program: &str, args: &[String], cwd: &Path, timeout: Duration)
    -> Result<ToolOutcome>;
}

/// `ToolRunner` backed by real subprocesses
pub struct SystemToolRunner;

impl SystemToolRunner {
    /// Check whether a program is resolvable on PATH
    pub fn available(program: &str) -> bool {
        which::which(program).is_ok()
    }
}

impl ToolRunner for SystemToolRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
        timeout: Duration,
    ) -> Result<ToolOutcome> {
        tracing::debug!(program, ?args, "delegating to external tool");

        let mut child = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("Failed to start {program}"))?;

        let started = Instant::now();
        loop {
            if let Some(status) = child
                .try_wait()
                .with_context(|| format!("Failed to wait for {program}"))?
            {
                return Ok(ToolOutcome::Exited(status.code().unwrap_or(1)));
            }

            if started.elapsed() >= timeout {
                child.kill().ok();
                child.wait().ok();
                return Ok(ToolOutcome::TimedOut);
            }

            std::thread::sleep(Duration::from_millis(25));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_exit_codes() {
        let runner = SystemToolRunner;
        let cwd = std::env::temp_dir();

        let ok = runner
            .run("true", &[], &cwd, Duration::from_secs(5))
            .unwrap();
        assert_eq!(ok, ToolOutcome::Exited(0));
        assert!(ok.success());

        let fail = runner
            .run("false", &[], &cwd, Duration::from_secs(5))
            .unwrap();
        assert_eq!(fail, ToolOutcome::Exited(1));
        assert!(!fail.success());
    }

    #[test]
    fn kills_and_reports_timed_out_tools() {
        let runner = SystemToolRunner;
        let cwd = std::env::temp_dir();

        let outcome = runner
            .run(
                "sleep",
                &["5".to_string()],
                &cwd,
                Duration::from_millis(100),
            )
            .unwrap();
        assert_eq!(outcome, ToolOutcome::TimedOut);
    }

    #[test]
    fn missing_program_is_an_error() {
        let runner = SystemToolRunner;
        let cwd = std::env::temp_dir();
        let result = runner.run(
            "commitgate-no-such-tool",
            &[],
            &cwd,
            Duration::from_secs(1),
        );
        assert!(result.is_err());
    }
}
