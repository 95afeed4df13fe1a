use super::{BatchError, CallscanErrorCode, ConfigError, RecordError};

/// Umbrella error for library callers that cross subsystem boundaries.
#[derive(Debug, thiserror::Error)]
pub enum CallscanError {
    #[error("record error: {0}")]
    Record(#[from] RecordError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("batch error: {0}")]
    Batch(#[from] BatchError),
}

impl CallscanErrorCode for CallscanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Record(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Batch(e) => e.error_code(),
        }
    }
}

pub type CallscanResult<T> = Result<T, CallscanError>;
