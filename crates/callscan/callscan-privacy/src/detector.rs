use callscan_core::models::SensitiveInfoFindings;
use callscan_core::traits::ISensitiveDetector;

use crate::patterns::CompiledPattern;
use crate::rules::RuleSet;

/// Applies each category pattern independently to a text.
///
/// Matches are not de-duplicated across categories: a digit run inside a
/// larger currency amount can show up under two keys.
#[derive(Debug, Clone)]
pub struct SensitiveInfoDetector {
    patterns: Vec<CompiledPattern>,
}

impl SensitiveInfoDetector {
    pub fn new(patterns: Vec<CompiledPattern>) -> Self {
        Self { patterns }
    }

    pub fn from_rules(rules: &RuleSet) -> Self {
        Self::new(rules.patterns.clone())
    }

    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }
}

impl Default for SensitiveInfoDetector {
    fn default() -> Self {
        Self::from_rules(&RuleSet::defaults())
    }
}

impl ISensitiveDetector for SensitiveInfoDetector {
    fn detect(&self, text: &str) -> SensitiveInfoFindings {
        let mut findings =
            SensitiveInfoFindings::for_categories(self.patterns.iter().map(|p| p.category));
        for pattern in &self.patterns {
            findings.record(pattern.category, pattern.find_all(text));
        }
        findings
    }
}
