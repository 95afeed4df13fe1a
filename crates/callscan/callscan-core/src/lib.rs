//! # callscan-core
//!
//! Foundation crate for the callscan compliance scanner.
//! Defines the conversation data model, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CallscanConfig;
pub use errors::{CallscanError, CallscanResult};
pub use models::{
    Category, ComplianceReport, ComplianceResult, Conversation, SensitiveInfoFindings, Speaker,
    Utterance,
};
