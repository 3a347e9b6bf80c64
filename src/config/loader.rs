use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::state::{AppState, Color, Dimensions};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Values supplied on the command line. `None` keeps the file value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub palette: Option<Vec<Color>>,
    pub frame_interval_ms: Option<u64>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pixelboard/config.toml` on Unix,
    /// or the equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to the current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pixelboard").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Layer command-line values over this config and re-validate.
    pub fn apply(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(rows) = overrides.rows {
            self.canvas.rows = rows;
        }
        if let Some(cols) = overrides.cols {
            self.canvas.cols = cols;
        }
        if let Some(palette) = overrides.palette {
            self.palette = palette;
        }
        if let Some(ms) = overrides.frame_interval_ms {
            self.render.frame_interval_ms = ms;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(file) = overrides.log_file {
            self.logging.file = Some(file);
        }
        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The board has at least one row and one column
    /// - The palette has at least one color and no duplicates
    /// - The frame interval is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.rows == 0 || self.canvas.cols == 0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Canvas must be at least 1x1, got {}x{}",
                    self.canvas.rows, self.canvas.cols
                ),
            });
        }

        if self.palette.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Palette must contain at least one color".to_string(),
            });
        }

        if let Some((index, color)) = self
            .palette
            .iter()
            .enumerate()
            .find(|(index, color)| self.palette[..*index].contains(color))
        {
            return Err(ConfigError::ValidationError {
                message: format!("Palette entry {} ('{}') is a duplicate", index + 1, color),
            });
        }

        if self.render.frame_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "render.frame_interval_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.canvas.rows, self.canvas.cols)
    }

    /// Snapshot the canvas starts from: empty board, first palette color.
    pub fn initial_state(&self) -> AppState {
        AppState::new(self.dimensions(), self.palette.clone())
    }
}
