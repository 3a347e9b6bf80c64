use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::state::Color;

#[derive(Debug, Parser)]
#[command(name = "pixelboard", version, about = "Paint pixels in your terminal")]
pub struct Cli {
    /// Config file (default: <config dir>/pixelboard/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of board rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of board columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// Comma-separated palette, e.g. "black,red,#00ff88"
    #[arg(long, value_delimiter = ',', value_name = "COLORS")]
    pub palette: Option<Vec<Color>>,

    /// Milliseconds between frame ticks
    #[arg(long, value_name = "MS")]
    pub frame_ms: Option<u64>,

    /// Log file path
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "pixelboard=trace"
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            rows: self.rows,
            cols: self.cols,
            palette: self.palette.clone(),
            frame_interval_ms: self.frame_ms,
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}
