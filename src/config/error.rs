//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(String),

    #[error("Match offset must be greater than zero")]
    InvalidMatchOffset,

    #[error("Chart size must be non-zero, got {width}x{height}")]
    InvalidChartSize { width: u32, height: u32 },
}
