// src/core/scanner/walk.rs
use anyhow::Result;
use std::env;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::config::Config;
use crate::core::ignore::load_ignore_patterns;
use crate::core::scanner::file::scan_file;
use crate::core::scanner::utils::{has_source_suffix, should_exclude};
use crate::models::Totals;

/// Walks a directory tree and accumulates line counts for every
/// recognized source file.
///
/// Directories matching the configured exclusion markers or an
/// `.ailocignore` pattern are pruned before descending. Visit order is
/// unspecified; the accumulation is a commutative sum, so the totals do
/// not depend on it.
///
/// # Arguments
///
/// * `dir` - The directory to scan; relative paths are resolved against
///   the current directory
/// * `config` - Suffixes, exclusion markers and region marker tokens
///
/// # Returns
///
/// * `Ok(Totals)` - The summed line counts for the traversal
///
/// # Errors
///
/// This function may return an error if:
/// * The directory cannot be accessed or read
/// * File system operations fail during traversal
/// * A source file cannot be read as UTF-8 text
/// * The ignore patterns file cannot be parsed
#[inline]
pub fn scan_directory(dir: &PathBuf, config: &Config) -> Result<Totals> {
    let absolute_dir = if dir.is_absolute() {
        dir.clone()
    } else {
        env::current_dir()?.join(dir)
    };

    let ignore_patterns = load_ignore_patterns(&absolute_dir)?;
    let mut totals = Totals::new();

    for entry in WalkDir::new(&absolute_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !should_exclude(e, &config.exclude, Some(&ignore_patterns)))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let recognized = entry
            .file_name()
            .to_str()
            .is_some_and(|name| has_source_suffix(name, &config.extensions));
        if !recognized {
            continue;
        }

        let result = scan_file(entry.path(), &config.begin_marker, &config.end_marker)?;
        totals.add(result);
    }

    Ok(totals)
}
