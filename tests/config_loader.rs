use pixelboard::config::{Config, ConfigError, ConfigOverrides};
use pixelboard::state::{Color, Dimensions};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, body).expect("write config");
    path
}

fn validation_message(result: Result<Config, ConfigError>) -> String {
    match result {
        Err(ConfigError::ValidationError { message }) => message,
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.canvas.rows, 20);
    assert_eq!(config.canvas.cols, 40);
    assert_eq!(
        config.palette,
        vec![
            Color::Black,
            Color::Red,
            Color::Yellow,
            Color::Purple,
            Color::Blue,
            Color::Green,
        ]
    );
    assert_eq!(config.render.frame_interval_ms, 16);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("pixelboard/config.toml"));
}

#[test]
fn test_missing_file_yields_default() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

/// Sections left out of the file keep their defaults.
#[test]
fn test_partial_file_merges_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r##"
palette = ["white", "#112233", "Grey"]

[canvas]
rows = 8
"##,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.canvas.rows, 8);
    assert_eq!(config.canvas.cols, 40);
    assert_eq!(
        config.palette,
        vec![Color::White, Color::Rgb(0x11, 0x22, 0x33), Color::Gray]
    );
    assert_eq!(config.render.frame_interval_ms, 16);

    let state = config.initial_state();
    assert_eq!(state.dimensions(), Dimensions::new(8, 40));
    assert_eq!(state.brush, Color::White);
    assert!(state.board.is_clear());
}

#[test]
fn test_unknown_color_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"palette = ["black", "mauve"]"#);

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_zero_dimensions_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[canvas]\nrows = 0\ncols = 5\n");

    let message = validation_message(Config::load_from(&path));
    assert!(message.contains("at least 1x1"));
    assert!(message.contains("0x5"));
}

#[test]
fn test_empty_palette_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "palette = []\n");

    let message = validation_message(Config::load_from(&path));
    assert!(message.contains("at least one color"));
}

#[test]
fn test_duplicate_palette_entry_rejected() {
    let mut config = Config::default();
    config.palette = vec![Color::Red, Color::Blue, Color::Red];

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("Palette entry 3 ('red')"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_zero_frame_interval_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[render]\nframe_interval_ms = 0\n");

    let message = validation_message(Config::load_from(&path));
    assert!(message.contains("frame_interval_ms"));
}

#[test]
fn test_overrides_replace_file_values() {
    let overrides = ConfigOverrides {
        rows: Some(3),
        palette: Some(vec![Color::Blue, Color::Pink]),
        frame_interval_ms: Some(50),
        log_level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    let config = Config::default().apply(overrides).unwrap();
    assert_eq!(config.dimensions(), Dimensions::new(3, 40));
    assert_eq!(config.palette, vec![Color::Blue, Color::Pink]);
    assert_eq!(config.render.frame_interval_ms, 50);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_overrides_are_validated() {
    let overrides = ConfigOverrides {
        cols: Some(0),
        ..ConfigOverrides::default()
    };

    let message = validation_message(Config::default().apply(overrides));
    assert!(message.contains("20x0"));
}
