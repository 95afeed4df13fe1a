//! Trait seams between the core model and the scanning engines.

pub mod analyzer;

pub use analyzer::{IComplianceAnalyzer, ISensitiveDetector};
