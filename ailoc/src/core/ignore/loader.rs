// src/core/ignore/loader.rs
use crate::core::ignore::Patterns;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Name of the ignore file searched for in the scan root and its
/// parents.
pub const IGNORE_FILE: &str = ".ailocignore";

/// Loads ignore patterns for a scan rooted at `dir`.
///
/// The lookup walks from `dir` up through its parents and stops at the
/// first `.ailocignore` found; a tree with no ignore file yields an
/// empty rule set. The visited set guards against symlinked directory
/// cycles.
///
/// # Errors
///
/// This function may return an error if:
/// * The ignore file exists but cannot be read
/// * The ignore file contains invalid pattern syntax
#[inline]
pub fn load_ignore_patterns(dir: &Path) -> Result<Patterns> {
    let mut patterns = Patterns::new();
    let mut current = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current.clone()) {
        let ignore_file = current.join(IGNORE_FILE);

        if ignore_file.exists() {
            let content = fs::read_to_string(&ignore_file).with_context(|| {
                format!("Failed to read ignore file: {}", ignore_file.display())
            })?;
            for line in content.lines() {
                patterns.add_pattern(line)?;
            }
            break;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    Ok(patterns)
}
