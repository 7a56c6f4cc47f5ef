// tests/integration_tests/scanning_test.rs
use super::common::{create_test_file, setup_test_directory};
use ailoc::{Config, scan_directory};
use anyhow::Result;

#[test]
fn test_scan_aggregates_across_files() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let totals = scan_directory(&temp_dir.path().to_path_buf(), &Config::default())?;

    assert_eq!(
        totals.total_lines, 16,
        "plain (5) + generated (5) + mixed (3+2) + header (1)"
    );
    assert_eq!(
        totals.tagged_lines, 8,
        "generated (5) + the tagged span of mixed (3)"
    );
    assert!((totals.calculate_percentage() - 50.0).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn test_excluded_directories_are_never_counted() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    // Same source content, placed under every excluded directory kind,
    // with mixed case in the path.
    create_test_file(
        temp_dir.path(),
        "CMAKE-BUILD-release/deep/extra.cpp",
        "int a;\n",
    )?;
    create_test_file(temp_dir.path(), ".Git/objects/extra.cpp", "int b;\n")?;
    create_test_file(temp_dir.path(), ".IDEA/extra.cpp", "int c;\n")?;

    let totals = scan_directory(&temp_dir.path().to_path_buf(), &Config::default())?;
    assert_eq!(
        totals.total_lines, 16,
        "nothing under excluded directories may be counted"
    );
    Ok(())
}

#[test]
fn test_unrecognized_suffixes_are_skipped() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    create_test_file(temp_dir.path(), "src/extra.c", "int a;\nint b;\n")?;
    create_test_file(temp_dir.path(), "src/extra.rs", "fn a() {}\n")?;

    let totals = scan_directory(&temp_dir.path().to_path_buf(), &Config::default())?;
    assert_eq!(totals.total_lines, 16, "only .cpp/.hpp files count");
    Ok(())
}

#[test]
fn test_custom_markers() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    create_test_file(
        temp_dir.path(),
        "src/custom.cpp",
        "// GEN-START\nint g;\n// GEN-STOP\n",
    )?;

    let config = Config {
        begin_marker: String::from("GEN-START"),
        end_marker: String::from("GEN-STOP"),
        ..Config::default()
    };
    let totals = scan_directory(&temp_dir.path().to_path_buf(), &config)?;

    assert_eq!(totals.total_lines, 19);
    assert_eq!(
        totals.tagged_lines, 3,
        "only the custom markers open regions now"
    );
    Ok(())
}
