//! Error handling for callscan.
//! One error enum per subsystem, `thiserror` only. `anyhow` stays in the binary.

pub mod batch_error;
pub mod callscan_error;
pub mod config_error;
pub mod error_code;
pub mod record_error;

pub use batch_error::BatchError;
pub use callscan_error::{CallscanError, CallscanResult};
pub use config_error::ConfigError;
pub use error_code::CallscanErrorCode;
pub use record_error::RecordError;
