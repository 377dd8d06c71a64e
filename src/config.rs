// config.rs

use crate::error::{Result, SpinnerError};
use config::{Config, Environment, File};
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_FRAMES: [&str; 8] = ["—", "\\", "|", "/", "-", "\\", "|", "/"];
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(300);
pub const DEFAULT_EMPTY_FRAME: &str = " ";

/// Prefix for environment overrides, e.g. `SPINLINE_STATUS`.
pub const ENV_PREFIX: &str = "SPINLINE";

/// Construction-time spinner settings.
///
/// Missing keys fall back to the defaults above, so a config file only needs
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpinnerConfig {
    pub status: String,
    pub frames: Vec<String>,
    pub interval_ms: u64,
    pub empty_frame: String,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        SpinnerConfig {
            status: String::new(),
            frames: DEFAULT_FRAMES.iter().map(|f| f.to_string()).collect(),
            interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            empty_frame: DEFAULT_EMPTY_FRAME.to_string(),
        }
    }
}

impl SpinnerConfig {
    /// Layers the defaults, an optional config file and `SPINLINE_*`
    /// environment variables, later sources winning.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            info!("Loading spinner config from {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("frames"),
        );

        let config: SpinnerConfig = builder.build()?.try_deserialize()?;
        debug!("Resolved spinner config: {:?}", config);
        Ok(config)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frames.is_empty() {
            return Err(SpinnerError::EmptyFrames);
        }
        if self.interval_ms == 0 {
            return Err(SpinnerError::ZeroInterval);
        }
        Ok(())
    }
}
