//! File-size check
//!
//! Stats every staged file and compares it against the limit resolved
//! by the size policy (extension, then category, then default). A file
//! that cannot be statted is reported and skipped; a broken limits
//! table aborts the check as a configuration error.

use super::{relative_to_cwd, CheckResult, Finding};
use crate::cli::Output;
use crate::config::FileSizeConfig;
use crate::size::{format_bytes, resolve_limit};
use anyhow::{Context, Result};

pub const NAME: &str = "file-size";

pub fn run(config: &FileSizeConfig, files: &[String], output: &Output) -> Result<CheckResult> {
    if !config.enabled {
        return Ok(CheckResult::clean(NAME));
    }

    let mut result = CheckResult::new(NAME, config.block_commit);

    for file in files {
        let size = match std::fs::metadata(file) {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                output.error(&format!("Error checking file {file}: {e}"));
                continue;
            }
        };

        let limit = resolve_limit(file, &config.limits)
            .with_context(|| format!("Unusable size limit for {file}"))?;

        if size > limit {
            tracing::debug!(file, size, limit, "file exceeds size limit");
            result.findings.push(Finding::oversized(relative_to_cwd(file), size, limit));
        }
    }

    if result.has_findings() {
        let largest = result.findings.iter().filter_map(|f| f.size).max().unwrap_or(0);
        result.tips.push(format!(
            "Compress images or move large files (biggest: {}) to Git LFS: https://git-lfs.github.com",
            format_bytes(largest, 2)
        ));
    }

    Ok(result)
}
