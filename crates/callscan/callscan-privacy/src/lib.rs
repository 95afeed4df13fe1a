//! # callscan-privacy
//!
//! Rule-based privacy-compliance analysis over call transcripts.
//! Detects balances, SSNs and account numbers in agent turns and flags the
//! ones disclosed before any identity-verification prompt.

pub mod detector;
pub mod engine;
pub mod patterns;
pub mod rules;
pub mod verification;

pub use detector::SensitiveInfoDetector;
pub use engine::ComplianceEngine;
pub use rules::RuleSet;
pub use verification::VerificationChecker;
