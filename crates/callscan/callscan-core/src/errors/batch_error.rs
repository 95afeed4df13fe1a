//! Batch-level errors. These are fatal for the whole run, unlike `RecordError`.

use std::path::PathBuf;

use super::error_code::{self, CallscanErrorCode};

/// Errors that stop a batch run.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("cannot read record directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to build worker pool: {message}")]
    ThreadPool { message: String },

    #[error("failed to write report to {path}: {message}")]
    Output { path: String, message: String },
}

impl CallscanErrorCode for BatchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Output { .. } => error_code::OUTPUT_ERROR,
            _ => error_code::BATCH_ERROR,
        }
    }
}
