use crate::models::{ComplianceReport, ComplianceResult, Conversation, SensitiveInfoFindings};

/// Sensitive-information detection over a single utterance text.
pub trait ISensitiveDetector: Send + Sync {
    /// Collect every match per category. Never fails; empty text yields
    /// empty lists.
    fn detect(&self, text: &str) -> SensitiveInfoFindings;
}

/// Per-call compliance analysis.
pub trait IComplianceAnalyzer: Send + Sync {
    /// Texts of agent turns that disclosed sensitive information before any
    /// verification prompt.
    fn analyze(&self, conversation: &Conversation) -> ComplianceResult {
        self.analyze_detailed(conversation).result()
    }

    /// Every disclosure with its findings and verification evidence.
    fn analyze_detailed(&self, conversation: &Conversation) -> ComplianceReport;
}
