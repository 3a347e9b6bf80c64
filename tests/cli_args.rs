//! Tests for CLI argument handling against the built binary.

use std::process::Command;
use tempfile::TempDir;

fn pixelboard_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pixelboard"))
}

#[test]
fn test_help_lists_canvas_options() {
    let output = pixelboard_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--palette"));
    assert!(stdout.contains("--rows"));
    assert!(stdout.contains("Milliseconds between frame ticks"));
}

#[test]
fn test_zero_rows_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = pixelboard_cmd()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .arg("--rows")
        .arg("0")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Config validation failed: Canvas must be at least 1x1, got 0x40"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_unknown_palette_color_is_a_usage_error() {
    let output = pixelboard_cmd()
        .arg("--palette")
        .arg("black,chartreuse")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("chartreuse"));
}

#[test]
fn test_broken_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[canvas\nrows = 3").unwrap();

    let output = pixelboard_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
}
