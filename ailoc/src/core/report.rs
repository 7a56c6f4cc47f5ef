// src/core/report.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use crate::models::Report;

/// Writes the report into `root` under `output` and echoes the same
/// JSON to stdout after a confirmation line.
///
/// # Arguments
///
/// * `report` - The assembled report
/// * `root` - The scanned directory; the report file is created here
/// * `output` - The report file name
///
/// # Returns
///
/// * `Ok(())` on success
///
/// # Errors
///
/// This function may return an error if:
/// * The report cannot be serialized
/// * The report file cannot be created or written
pub fn write_report(report: &Report, root: &Path, output: &str) -> Result<()> {
    let json = report.to_json()?;
    let out_path = root.join(output);

    fs::write(&out_path, &json)
        .with_context(|| format!("Failed to write report to {}", out_path.display()))?;

    println!("Wrote {output} with:");
    println!("{json}");
    Ok(())
}
