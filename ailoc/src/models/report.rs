// src/models/report.rs
use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::config::Config;
use crate::models::Totals;

/// Final summary record written to disk and printed to stdout.
/// Field order is the wire order of the JSON report.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub total_lines: u64,
    pub ai_tagged_lines: u64,
    pub percent: f64,
    pub tools: Vec<String>,
    pub method: String,
}

impl Report {
    #[must_use]
    pub fn new(totals: &Totals, config: &Config) -> Self {
        Self {
            total_lines: totals.total_lines,
            ai_tagged_lines: totals.tagged_lines,
            percent: totals.calculate_percentage(),
            tools: config.tools.clone(),
            method: config.method.clone(),
        }
    }

    /// Pretty-prints the report as 2-space-indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }
}
