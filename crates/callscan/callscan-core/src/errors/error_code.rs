//! CallscanErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// that survives into skipped-record reports and CLI output.
pub trait CallscanErrorCode {
    /// Returns the error code string (e.g., "MALFORMED_RECORD").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const RECORD_IO_ERROR: &str = "RECORD_IO_ERROR";
pub const INVALID_JSON: &str = "INVALID_JSON";
pub const MALFORMED_RECORD: &str = "MALFORMED_RECORD";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
pub const BATCH_ERROR: &str = "BATCH_ERROR";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
