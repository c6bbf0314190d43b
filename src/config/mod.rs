//! Application configuration module
//!
//! Configuration is read with the `config` crate from an optional
//! `survey_satisfaction.toml` in the working directory. Every value has a
//! default, so the file may be absent or partial.
//!
//! # Example
//!
//! ```no_run
//! use survey_satisfaction::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading {}", config.input.path.display());
//! ```
//!
//! # File Format
//!
//! ```toml
//! [input]
//! path = "survey.csv"
//! delimiter = ","
//!
//! [encoding]
//! age_fallback = "oldest_bracket"
//! no_preference_sentinel = "other"
//! match_offset = 8
//!
//! [output]
//! charts_enabled = true
//! chart_dir = "figures"
//! report_path = "report.json"
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```

mod encoding;
mod error;
mod input;
mod logging;
mod output;

pub use encoding::EncodingConfig;
pub use error::{ConfigError, ValidationError};
pub use input::InputConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use output::OutputConfig;

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::encoding::EncodingSettings;

/// Base name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "survey_satisfaction";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub encoding: EncodingConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `survey_satisfaction.toml` if present
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a specific file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Replace the input path, e.g. from the command line
    pub fn with_input_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.input.path = path;
        }
        self
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.input.validate()?;
        self.encoding.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    pub fn encoding_settings(&self) -> EncodingSettings {
        self.encoding.settings()
    }
}
