// src/core/scanner/test_utils.rs
use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "src/main.cpp", "int main() {\n    return 0;\n}\n")?;
    create_test_file(
        &dir,
        "src/widget.cpp",
        "// AI-BEGIN\nint magic() {\n    return 42;\n}\n// AI-END\n",
    )?;
    create_test_file(&dir, "src/widget.hpp", "int magic();\n")?;
    create_test_file(&dir, "README.md", "not a source file\n")?;

    // Directories the exclusion policy must prune.
    create_test_file(&dir, "cmake-build-debug/gen.cpp", "int generated;\n")?;
    create_test_file(&dir, "CMake-Build-Release/gen.cpp", "int generated;\n")?;
    create_test_file(&dir, ".git/hooks/sample.cpp", "int hook;\n")?;
    create_test_file(&dir, ".idea/template.cpp", "int template_;\n")?;

    Ok(dir)
}
