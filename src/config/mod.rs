mod loader;
mod types;

pub use loader::{ConfigError, ConfigOverrides};
pub use types::{CanvasConfig, Config, LoggingConfig, RenderConfig};
