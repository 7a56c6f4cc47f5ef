// tests/integration_tests/report_test.rs
use super::common::setup_test_directory;
use ailoc::{Args, run};
use anyhow::Result;
use std::fs;

fn args_for(dir: &std::path::Path) -> Args {
    Args {
        directory: dir.to_path_buf(),
        output: None,
        extensions: None,
        exclude: None,
        begin_marker: None,
        end_marker: None,
    }
}

#[test]
fn test_run_writes_report_into_scan_root() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    run(args_for(temp_dir.path()))?;

    let report_path = temp_dir.path().join("ai_report.json");
    assert!(report_path.exists(), "report file should be created");

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report_path)?)?;
    assert_eq!(json["total_lines"], 16);
    assert_eq!(json["ai_tagged_lines"], 8);
    assert_eq!(json["percent"], 50.0);
    assert_eq!(json["tools"][0], "ChatGPT");
    assert_eq!(json["method"], "count AI-BEGIN/AI-END markers");
    Ok(())
}

#[test]
fn test_report_is_indented_with_two_spaces() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    run(args_for(temp_dir.path()))?;

    let content = fs::read_to_string(temp_dir.path().join("ai_report.json"))?;
    assert!(
        content.contains("\n  \"total_lines\""),
        "fields should be indented by two spaces: {content}"
    );
    Ok(())
}

#[test]
fn test_repeat_runs_are_byte_identical() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let report_path = temp_dir.path().join("ai_report.json");

    run(args_for(temp_dir.path()))?;
    let first = fs::read(&report_path)?;

    run(args_for(temp_dir.path()))?;
    let second = fs::read(&report_path)?;

    assert_eq!(first, second, "no run-dependent metadata in the report");
    Ok(())
}

#[test]
fn test_custom_output_name() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let mut args = args_for(temp_dir.path());
    args.output = Some(String::from("attribution.json"));
    run(args)?;

    assert!(temp_dir.path().join("attribution.json").exists());
    assert!(!temp_dir.path().join("ai_report.json").exists());
    Ok(())
}
