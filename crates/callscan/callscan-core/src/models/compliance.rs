use serde::{Deserialize, Serialize};

use super::SensitiveInfoFindings;

/// Texts of agent turns that disclosed sensitive information without a
/// prior verification prompt, in turn order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub non_compliant_utterances: Vec<String>,
}

impl ComplianceResult {
    pub fn is_compliant(&self) -> bool {
        self.non_compliant_utterances.is_empty()
    }
}

/// An agent turn that contained sensitive information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclosure {
    /// Position of the turn in the call.
    pub index: usize,
    pub text: String,
    pub findings: SensitiveInfoFindings,
    /// Index of the first earlier agent turn that asked for verification.
    pub verified_by: Option<usize>,
}

impl Disclosure {
    pub fn is_verified(&self) -> bool {
        self.verified_by.is_some()
    }
}

/// Detailed per-call analysis: every disclosure, verified or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub disclosures: Vec<Disclosure>,
}

impl ComplianceReport {
    /// Disclosures with no preceding verification.
    pub fn violations(&self) -> impl Iterator<Item = &Disclosure> {
        self.disclosures.iter().filter(|d| !d.is_verified())
    }

    pub fn is_compliant(&self) -> bool {
        self.violations().next().is_none()
    }

    /// Project onto the flat result shape.
    pub fn result(&self) -> ComplianceResult {
        ComplianceResult {
            non_compliant_utterances: self.violations().map(|d| d.text.clone()).collect(),
        }
    }
}
