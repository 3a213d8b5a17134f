//! Size policy resolution
//!
//! Maps a file path to its applicable size limit (exact extension entry,
//! then category membership, then `default`) and converts between
//! human-readable size strings and byte counts.

use crate::config::SizeSpec;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

/// Errors surfaced by size parsing and limit resolution.
///
/// These are configuration errors: the affected check is treated as
/// failed-to-run and blocks the commit regardless of `block_commit`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizeError {
    #[error("invalid size format: {0:?}")]
    InvalidFormat(String),

    #[error("unknown size unit: {0:?}")]
    UnknownUnit(String),

    #[error("size limits have no \"default\" entry")]
    MissingDefault,
}

/// Extensions grouped under the "images" category limit
pub const IMAGE_EXTENSIONS: &[&str] =
    &[".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".ico", ".bmp"];

/// Extensions grouped under the "videos" category limit
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".avi", ".mov", ".wmv", ".flv", ".webm"];

/// Extensions grouped under the "documents" category limit
pub const DOCUMENT_EXTENSIONS: &[&str] =
    &[".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx"];

static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\s*([a-z]+)?$").unwrap_or_else(|e| panic!("size regex: {e}"))
});

/// Parse a size spec into a byte count. Numeric specs pass through
/// unchanged (units are bytes).
pub fn parse_size(spec: &SizeSpec) -> Result<u64, SizeError> {
    match spec {
        SizeSpec::Bytes(n) => Ok(*n),
        SizeSpec::Text(s) => parse_size_str(s),
    }
}

/// Parse a human-readable size string ("2mb", "500 KB", "1024") into a
/// byte count. The unit defaults to bytes when omitted.
pub fn parse_size_str(input: &str) -> Result<u64, SizeError> {
    let normalized = input.trim().to_lowercase();
    let caps = SIZE_RE
        .captures(&normalized)
        .ok_or_else(|| SizeError::InvalidFormat(input.to_string()))?;

    let value: f64 = caps[1]
        .parse()
        .map_err(|_| SizeError::InvalidFormat(input.to_string()))?;

    let unit = caps.get(2).map(|m| m.as_str()).unwrap_or("b");
    let multiplier: u64 = match unit {
        "b" | "byte" | "bytes" => 1,
        "kb" | "kilobyte" | "kilobytes" => 1024,
        "mb" | "megabyte" | "megabytes" => 1024 * 1024,
        "gb" | "gigabyte" | "gigabytes" => 1024 * 1024 * 1024,
        other => return Err(SizeError::UnknownUnit(other.to_string())),
    };

    Ok((value * multiplier as f64) as u64)
}

/// Format a byte count with the largest unit whose displayed value is
/// at least 1, trimming trailing zeros. `format_bytes(0, _) == "0 Bytes"`.
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    let rendered = format!("{value:.decimals$}");
    let rendered = if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        &rendered
    };

    format!("{} {}", rendered, UNITS[exponent])
}

/// Resolve the applicable limit for a file: exact extension entry, else
/// category entry, else `default`. A missing `default` is a
/// configuration error.
pub fn resolve_limit(
    file: &str,
    limits: &BTreeMap<String, SizeSpec>,
) -> Result<u64, SizeError> {
    let ext = extension_of(file);

    if let Some(spec) = limits.get(&ext) {
        return parse_size(spec);
    }

    if let Some(category) = category_of(&ext) {
        if let Some(spec) = limits.get(category) {
            return parse_size(spec);
        }
    }

    match limits.get("default") {
        Some(spec) => parse_size(spec),
        None => Err(SizeError::MissingDefault),
    }
}

/// Category name for an extension, if it belongs to one
fn category_of(ext: &str) -> Option<&'static str> {
    if IMAGE_EXTENSIONS.contains(&ext) {
        Some("images")
    } else if VIDEO_EXTENSIONS.contains(&ext) {
        Some("videos")
    } else if DOCUMENT_EXTENSIONS.contains(&ext) {
        Some("documents")
    } else {
        None
    }
}

/// Lower-cased extension including the leading dot, or empty string
fn extension_of(file: &str) -> String {
    Path::new(file)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(entries: &[(&str, &str)]) -> BTreeMap<String, SizeSpec> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), SizeSpec::Text(v.to_string())))
            .collect()
    }

    #[test]
    fn parses_plain_byte_counts() {
        assert_eq!(parse_size(&SizeSpec::Bytes(1_048_576)), Ok(1_048_576));
        assert_eq!(parse_size_str("1024"), Ok(1024));
    }

    #[test]
    fn parses_units_case_insensitively() {
        assert_eq!(parse_size_str("500kb"), Ok(512_000));
        assert_eq!(parse_size_str("2MB"), Ok(2 * 1024 * 1024));
        assert_eq!(parse_size_str("1 GB"), Ok(1024 * 1024 * 1024));
        assert_eq!(parse_size_str("3 megabytes"), Ok(3 * 1024 * 1024));
        assert_eq!(parse_size_str("10 Bytes"), Ok(10));
    }

    #[test]
    fn parses_fractional_values() {
        assert_eq!(parse_size_str("1.5kb"), Ok(1536));
        assert_eq!(parse_size_str("0.5mb"), Ok(512 * 1024));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(
            parse_size_str("bogus"),
            Err(SizeError::InvalidFormat("bogus".to_string()))
        );
        assert_eq!(
            parse_size_str("mb5"),
            Err(SizeError::InvalidFormat("mb5".to_string()))
        );
        assert_eq!(parse_size_str(""), Err(SizeError::InvalidFormat(String::new())));
    }

    #[test]
    fn rejects_unknown_units() {
        assert_eq!(parse_size_str("5tb"), Err(SizeError::UnknownUnit("tb".to_string())));
        assert_eq!(
            parse_size_str("12 parsecs"),
            Err(SizeError::UnknownUnit("parsecs".to_string()))
        );
    }

    #[test]
    fn formats_zero_and_small_sizes() {
        assert_eq!(format_bytes(0, 2), "0 Bytes");
        assert_eq!(format_bytes(512, 2), "512 Bytes");
        assert_eq!(format_bytes(1023, 2), "1023 Bytes");
    }

    #[test]
    fn formats_with_trimmed_trailing_zeros() {
        assert_eq!(format_bytes(1024, 2), "1 KB");
        assert_eq!(format_bytes(512_000, 2), "500 KB");
        assert_eq!(format_bytes(2 * 1024 * 1024, 2), "2 MB");
        assert_eq!(format_bytes(1536, 2), "1.5 KB");
        assert_eq!(format_bytes(3_145_728, 2), "3 MB");
    }

    #[test]
    fn parse_format_round_trips() {
        for spec in ["500kb", "2mb", "1gb", "100b", "10mb"] {
            let bytes = parse_size_str(spec).unwrap();
            let formatted = format_bytes(bytes, 2);
            let reparsed = parse_size_str(&formatted).unwrap();
            assert_eq!(bytes, reparsed, "round trip for {spec} via {formatted}");
        }
    }

    #[test]
    fn extension_beats_category_beats_default() {
        let limits = limits(&[(".png", "2mb"), ("images", "10mb"), ("default", "5mb")]);

        assert_eq!(resolve_limit("a.png", &limits), Ok(2 * 1024 * 1024));
        assert_eq!(resolve_limit("b.jpg", &limits), Ok(10 * 1024 * 1024));
        assert_eq!(resolve_limit("c.txt", &limits), Ok(5 * 1024 * 1024));
    }

    #[test]
    fn category_falls_back_to_default_when_absent() {
        let limits = limits(&[("default", "5mb")]);
        assert_eq!(resolve_limit("clip.mp4", &limits), Ok(5 * 1024 * 1024));
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        let limits = limits(&[(".png", "2mb"), ("default", "5mb")]);
        assert_eq!(resolve_limit("SHOT.PNG", &limits), Ok(2 * 1024 * 1024));
    }

    #[test]
    fn missing_default_is_a_configuration_error() {
        let limits = limits(&[(".png", "2mb")]);
        assert_eq!(resolve_limit("notes.txt", &limits), Err(SizeError::MissingDefault));
    }
}
