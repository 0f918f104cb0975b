use thiserror::Error;

/// Errors that can occur when building or loading a configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid color format: {0}")]
    InvalidColor(String),
    #[error("Invalid preset: {0}")]
    Preset(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
