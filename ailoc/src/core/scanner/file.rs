// src/core/scanner/file.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use crate::models::ScanResult;

/// Scans a single source file, classifying each line as inside or
/// outside a marker-delimited region.
///
/// # Arguments
///
/// * `path` - The file to scan
/// * `begin_marker` - Token that opens a tagged region
/// * `end_marker` - Token that closes a tagged region
///
/// # Returns
///
/// * `Ok(ScanResult)` - Total and tagged line counts for the file
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened or read
/// * The file is not valid UTF-8
#[inline]
pub fn scan_file(path: &Path, begin_marker: &str, end_marker: &str) -> Result<ScanResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    Ok(scan_lines(&content, begin_marker, end_marker))
}

/// Region toggle over the lines of `content`.
///
/// Both marker lines count as tagged: the begin check runs before the
/// line is classified and the end check after. The region state is a
/// single boolean, so an end marker closes the region no matter how
/// many begin markers preceded it, and an end marker with no open
/// region is a no-op.
#[must_use]
pub fn scan_lines(content: &str, begin_marker: &str, end_marker: &str) -> ScanResult {
    let mut result = ScanResult::new();
    let mut in_region = false;

    for line in content.lines() {
        result.total = result.total.saturating_add(1);
        let text = line.trim();

        if text.contains(begin_marker) {
            in_region = true;
        }
        if in_region {
            result.tagged = result.tagged.saturating_add(1);
        }
        if text.contains(end_marker) {
            in_region = false;
        }
    }

    result
}
