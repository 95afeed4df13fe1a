//! Per-record decode errors. None of these abort a batch.

use std::path::{Path, PathBuf};

use super::error_code::{self, CallscanErrorCode};

/// Errors raised while reading or decoding a single call record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {message}")]
    InvalidJson { path: PathBuf, message: String },

    /// Syntactically valid JSON whose shape is not a conversation, e.g. an
    /// utterance missing `text` or `speaker`.
    #[error("malformed record {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

impl RecordError {
    /// Classify a `serde_json` failure: syntax and truncation errors are
    /// `InvalidJson`, shape errors are `Malformed`.
    pub fn from_json(path: &Path, err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => Self::Malformed {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
            Category::Io => Self::Io {
                path: path.to_path_buf(),
                source: err.into(),
            },
            Category::Syntax | Category::Eof => Self::InvalidJson {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
        }
    }

    /// Path of the offending record.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::InvalidJson { path, .. } | Self::Malformed { path, .. } => {
                path
            }
        }
    }
}

impl CallscanErrorCode for RecordError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::RECORD_IO_ERROR,
            Self::InvalidJson { .. } => error_code::INVALID_JSON,
            Self::Malformed { .. } => error_code::MALFORMED_RECORD,
        }
    }
}
