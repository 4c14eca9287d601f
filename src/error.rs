//! Centralized error handling for nordfetch

use std::io;
use thiserror::Error;

/// Error type for nordfetch operations
#[derive(Debug, Error)]
pub enum FetchError {
    /// I/O errors (file reading, command execution)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Parsing errors (invalid data format)
    #[error("Parse error: {0}")]
    Parse(String),
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
    /// System detection errors
    #[error("Detection error: {0}")]
    Detection(String),
}

impl From<toml::de::Error> for FetchError {
    fn from(error: toml::de::Error) -> Self {
        FetchError::Config(error.to_string())
    }
}

/// Type alias for Results in nordfetch
pub type Result<T> = std::result::Result<T, FetchError>;
