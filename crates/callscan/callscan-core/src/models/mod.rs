//! Conversation data model and derived compliance results.

pub mod batch;
pub mod compliance;
pub mod conversation;
pub mod findings;

pub use batch::{BatchReport, CallReport, SkippedRecord};
pub use compliance::{ComplianceReport, ComplianceResult, Disclosure};
pub use conversation::{Conversation, Speaker, Utterance};
pub use findings::{Category, SensitiveInfoFindings};
