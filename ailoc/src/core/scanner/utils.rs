// src/core/scanner/utils.rs
use crate::core::ignore::Patterns;

/// Determines if a directory entry should be pruned from traversal
/// based on:
/// - Whether its path contains one of the excluded directory markers
///   (case-insensitive substring match, directories only)
/// - Whether it matches any patterns in the provided ignore patterns
///
/// # Arguments
/// * `entry` - The directory entry to check
/// * `exclude_dirs` - Markers for build, VCS and editor directories
/// * `ignore_patterns` - Optional gitignore-style patterns to match against
///
/// # Returns
/// `true` if the entry should be excluded, `false` otherwise
pub fn should_exclude(
    entry: &walkdir::DirEntry,
    exclude_dirs: &[String],
    ignore_patterns: Option<&Patterns>,
) -> bool {
    if entry.file_type().is_dir() {
        if let Some(path_str) = entry.path().to_str() {
            let lower = path_str.to_lowercase();
            if exclude_dirs
                .iter()
                .any(|marker| lower.contains(&marker.to_lowercase()))
            {
                return true;
            }
        }
    }

    if let Some(patterns) = ignore_patterns {
        if patterns.matches(entry.path()) {
            return true;
        }
    }

    false
}

/// Checks whether a file name ends with one of the recognized source
/// suffixes.
#[inline]
#[must_use]
pub fn has_source_suffix(name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}
