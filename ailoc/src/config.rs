// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Optional configuration file looked up in the scan root.
pub const CONFIG_FILE: &str = "ailoc.toml";

/// Scan settings. Every field has a built-in default, so the tool runs
/// with no configuration file and no flags at all; an `ailoc.toml` in
/// the scan root overrides individual keys, and CLI flags override
/// both.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// File name suffixes that identify source files, e.g. `".cpp"`.
    pub extensions: Vec<String>,
    /// Directory markers excluded from traversal, matched
    /// case-insensitively as substrings of the directory path.
    pub exclude: Vec<String>,
    /// Token that opens a tagged region (case-sensitive substring of
    /// the trimmed line).
    pub begin_marker: String,
    /// Token that closes a tagged region.
    pub end_marker: String,
    /// Report file name, created in the scan root.
    pub output: String,
    /// Tool labels embedded in the report.
    pub tools: Vec<String>,
    /// Method description embedded in the report.
    pub method: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: vec![String::from(".cpp"), String::from(".hpp")],
            exclude: vec![
                String::from("cmake-build"),
                String::from(".git"),
                String::from(".idea"),
            ],
            begin_marker: String::from("AI-BEGIN"),
            end_marker: String::from("AI-END"),
            output: String::from("ai_report.json"),
            tools: vec![String::from("ChatGPT")],
            method: String::from("count AI-BEGIN/AI-END markers"),
        }
    }
}

impl Config {
    /// Loads the configuration for a scan rooted at `dir`.
    ///
    /// A missing `ailoc.toml` yields the defaults; a present one
    /// overrides only the keys it names.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The configuration file exists but cannot be read
    /// * The configuration file is not valid TOML
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
