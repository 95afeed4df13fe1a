//! Configuration errors.

use super::error_code::{self, CallscanErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid pattern for category {category}: {message}")]
    InvalidPattern { category: String, message: String },
}

impl CallscanErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => error_code::INVALID_PATTERN,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
