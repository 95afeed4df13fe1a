use callscan_core::config::RulesConfig;
use callscan_core::errors::ConfigError;
use callscan_core::models::{ComplianceReport, Conversation, Disclosure};
use callscan_core::traits::{IComplianceAnalyzer, ISensitiveDetector};

use crate::detector::SensitiveInfoDetector;
use crate::rules::RuleSet;
use crate::verification::VerificationChecker;

/// Compliance analyzer for a single call.
///
/// One pass over the agent turns. Each turn with sensitive findings re-scans
/// its prefix for a verification prompt, so the worst case is quadratic in
/// call length. Customer turns are never flagged and never count as
/// verification. Implements `IComplianceAnalyzer` from callscan-core and is
/// shared read-only across batch workers.
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    detector: SensitiveInfoDetector,
    checker: VerificationChecker,
}

impl ComplianceEngine {
    /// Create an engine from explicit parts.
    pub fn new(detector: SensitiveInfoDetector, checker: VerificationChecker) -> Self {
        Self { detector, checker }
    }

    /// Create an engine from a compiled rule set.
    pub fn from_rules(rules: &RuleSet) -> Result<Self, ConfigError> {
        Ok(Self::new(
            SensitiveInfoDetector::from_rules(rules),
            VerificationChecker::from_rules(rules)?,
        ))
    }

    /// Create an engine from the `[rules]` config section.
    pub fn from_config(config: &RulesConfig) -> Result<Self, ConfigError> {
        Self::from_rules(&RuleSet::from_config(config)?)
    }

    /// Create an engine with the built-in rules.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::from_rules(&RuleSet::defaults())
    }

    pub fn detector(&self) -> &SensitiveInfoDetector {
        &self.detector
    }

    pub fn checker(&self) -> &VerificationChecker {
        &self.checker
    }
}

impl IComplianceAnalyzer for ComplianceEngine {
    fn analyze_detailed(&self, conversation: &Conversation) -> ComplianceReport {
        let mut disclosures = Vec::new();

        for (index, utterance) in conversation.agent_turns() {
            let findings = self.detector.detect(&utterance.text);
            if !findings.has_findings() {
                continue;
            }
            tracing::debug!(
                turn = index,
                categories = ?findings.categories_found(),
                text = %utterance.text,
                "sensitive info detected"
            );

            let verified_by = self.checker.first_verification_before(conversation, index);
            if verified_by.is_none() {
                tracing::debug!(turn = index, "sensitive info shared before verification");
            }

            disclosures.push(Disclosure {
                index,
                text: utterance.text.clone(),
                findings,
                verified_by,
            });
        }

        ComplianceReport { disclosures }
    }
}
