// src/core/ignore/patterns.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use std::path::Path;

/// Exclusion rules loaded from an `.ailocignore` file.
///
/// Supported line forms:
/// - `# comment` and blank lines (skipped)
/// - `!pattern` negation, re-including an otherwise ignored path
/// - `dir/` matching the directory and everything beneath it
/// - glob patterns (`*.tmp`, `generated/*.cpp`)
/// - `/pattern` anchored to the scan root
/// - bare file names, matched at any depth
#[derive(Debug, Default)]
pub struct Patterns {
    /// (compiled pattern, is_negation)
    patterns: Vec<(Pattern, bool)>,
}

impl Patterns {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Adds one ignore-file line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not valid glob syntax.
    pub fn add_pattern(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (body, is_negation) = line
            .strip_prefix('!')
            .map_or((line, false), |stripped| (stripped, true));
        let is_anchored = body.starts_with('/');
        let body = body.strip_prefix('/').unwrap_or(body);

        // `dir/` covers the whole subtree.
        let mut expanded = if body.ends_with('/') {
            format!("{body}**")
        } else {
            body.to_owned()
        };
        if !is_anchored && !expanded.starts_with("**/") {
            expanded = format!("**/{expanded}");
        }

        let compiled = Pattern::new(&expanded)
            .with_context(|| format!("Invalid ignore pattern: {line}"))?;
        self.patterns.push((compiled, is_negation));

        // A bare name must also match a path that is exactly that name,
        // without any leading directory components.
        if !is_anchored && !body.contains('/') {
            let direct = Pattern::new(body)
                .with_context(|| format!("Invalid ignore pattern: {line}"))?;
            self.patterns.push((direct, is_negation));
        }

        Ok(())
    }

    /// Checks a path against the rules. Negations win over matches.
    #[must_use]
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let path_str = path.to_string_lossy();
        let filename = path
            .file_name()
            .map(|f| f.to_string_lossy())
            .unwrap_or_default();

        for (pattern, is_negation) in &self.patterns {
            if *is_negation && (pattern.matches(&path_str) || pattern.matches(&filename)) {
                return false;
            }
        }

        for (pattern, is_negation) in &self.patterns {
            if !is_negation && (pattern.matches(&path_str) || pattern.matches(&filename)) {
                return true;
            }
        }

        false
    }
}
