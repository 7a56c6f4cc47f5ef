// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::core::report::write_report;
use crate::core::scanner::scan_directory;
use crate::models::Report;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Report file name written into the scanned directory
    #[arg(short, long)]
    pub output: Option<String>,

    /// Source file suffixes to scan (comma-separated, e.g. ".cpp,.hpp")
    #[arg(short, long)]
    pub extensions: Option<String>,

    /// Directory markers to exclude (comma-separated, case-insensitive)
    #[arg(short = 'x', long)]
    pub exclude: Option<String>,

    /// Token that opens a tagged region
    #[arg(long)]
    pub begin_marker: Option<String>,

    /// Token that closes a tagged region
    #[arg(long)]
    pub end_marker: Option<String>,
}

/// Runs one scan-and-report pass with the effective configuration:
/// built-in defaults, overridden by `ailoc.toml` in the scan root,
/// overridden by CLI flags.
///
/// # Errors
///
/// This function may return an error if:
/// * The configuration file cannot be read or parsed
/// * The directory cannot be traversed
/// * A source file cannot be read as UTF-8 text
/// * The report file cannot be written
pub fn run(args: Args) -> Result<()> {
    let mut config = Config::load(&args.directory)?;

    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(extensions) = args.extensions {
        config.extensions = split_list(&extensions);
    }
    if let Some(exclude) = args.exclude {
        config.exclude = split_list(&exclude);
    }
    if let Some(begin_marker) = args.begin_marker {
        config.begin_marker = begin_marker;
    }
    if let Some(end_marker) = args.end_marker {
        config.end_marker = end_marker;
    }

    let totals = scan_directory(&args.directory, &config)?;
    let report = Report::new(&totals, &config);
    write_report(&report, &args.directory, &config.output)
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
