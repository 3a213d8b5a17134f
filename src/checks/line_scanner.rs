//! Generalized forbidden-pattern line scanner
//!
//! Scans each file line by line for a set of forbidden patterns,
//! suppressing matches covered by an allow-list pattern on the same
//! line or sitting in commented-out code. The comment heuristic is a
//! deliberate simplification: a trimmed line starting with `//` or `*`
//! is taken as a comment, accepting false negatives inside block
//! comments rather than parsing syntax.

use super::{relative_to_cwd, Finding};
use crate::cli::Output;
use crate::config::PerformanceConfig;
use crate::parallel;
use anyhow::{Context, Result};
use regex::Regex;

pub struct LineScanner {
    patterns: Vec<Regex>,
    allowed: Vec<Regex>,
}

impl LineScanner {
    /// Compile the forbidden and allowed pattern sets. A pattern that
    /// fails to compile is a configuration error.
    pub fn new(patterns: &[String], allowed_patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p).with_context(|| format!("Invalid pattern: {p}")))
            .collect::<Result<Vec<_>>>()?;

        let allowed = allowed_patterns
            .iter()
            .map(|p| Regex::new(p).with_context(|| format!("Invalid allowed pattern: {p}")))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns, allowed })
    }

    /// Scan a set of files. A file that cannot be read is reported and
    /// skipped; it never becomes a finding. Findings come back in file
    /// order regardless of the execution strategy.
    pub fn scan_files(
        &self,
        files: &[String],
        perf: &PerformanceConfig,
        output: &Output,
    ) -> Vec<Finding> {
        let per_file = parallel::map_files(files, perf, |file| {
            std::fs::read_to_string(file)
                .map(|content| self.scan_content(file, &content))
                .map_err(|e| format!("Error reading file {file}: {e}"))
        });

        let mut findings = Vec::new();
        for result in per_file {
            match result {
                Ok(mut file_findings) => findings.append(&mut file_findings),
                Err(message) => output.error(&message),
            }
        }

        findings
    }

    /// Scan one file's full text
    pub fn scan_content(&self, file: &str, content: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (index, line) in content.lines().enumerate() {
            for pattern in &self.patterns {
                if let Some(matched) = pattern.find(line) {
                    if self.is_suppressed(line) {
                        continue;
                    }
                    findings.push(Finding::on_line(
                        relative_to_cwd(file),
                        index + 1,
                        line.trim().to_string(),
                        matched.as_str().to_string(),
                    ));
                }
            }
        }

        findings
    }

    /// A match is suppressed when an allowed pattern also hits the same
    /// line, or when the line reads as commented-out code.
    fn is_suppressed(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.starts_with('*') {
            return true;
        }

        self.allowed.iter().any(|allowed| allowed.is_match(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsoleLogsConfig;

    fn scanner() -> LineScanner {
        let config = ConsoleLogsConfig::default();
        LineScanner::new(&config.patterns, &config.allowed_patterns).unwrap()
    }

    #[test]
    fn records_file_line_and_matched_text() {
        let findings = scanner().scan_content(
            "src/app.ts",
            "const x = 1;\n  console.log('debug');\nconsole.warn('careful');\n",
        );

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].file, "src/app.ts");
        assert_eq!(findings[0].line, Some(2));
        assert_eq!(findings[0].content.as_deref(), Some("console.log('debug');"));
        assert_eq!(findings[0].matched.as_deref(), Some("console.log("));
        assert_eq!(findings[1].line, Some(3));
        assert_eq!(findings[1].matched.as_deref(), Some("console.warn("));
    }

    #[test]
    fn allowed_pattern_on_same_line_suppresses() {
        let findings = scanner().scan_content(
            "src/app.ts",
            "console.log('x'); // eslint-disable-next-line no-console\n",
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn logger_calls_are_allowed() {
        let findings =
            scanner().scan_content("src/app.ts", "logger.console.log = console.log('hooked');\n");
        assert!(findings.is_empty());
    }

    #[test]
    fn line_comments_are_suppressed() {
        let findings = scanner().scan_content("src/app.ts", "  // console.log('debug');\n");
        assert!(findings.is_empty());
    }

    #[test]
    fn block_comment_continuations_are_suppressed() {
        let findings = scanner().scan_content("src/app.ts", " * console.log('in a doc block')\n");
        assert!(findings.is_empty());
    }

    #[test]
    fn invalid_pattern_is_a_configuration_error() {
        let result = LineScanner::new(&["(unclosed".to_string()], &[]);
        assert!(result.is_err());
    }
}
