//! Compiled rule tables handed to the detector and the verification checker.

use callscan_core::config::RulesConfig;
use callscan_core::constants::DEFAULT_VERIFICATION_KEYWORDS;
use callscan_core::errors::ConfigError;
use callscan_core::models::Category;

use crate::patterns::{self, CompiledPattern};

/// Category patterns plus verification keywords.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub patterns: Vec<CompiledPattern>,
    pub keywords: Vec<String>,
}

impl RuleSet {
    /// The built-in rules.
    pub fn defaults() -> Self {
        Self {
            patterns: patterns::default_compiled(),
            keywords: DEFAULT_VERIFICATION_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }

    /// Build from config. Untouched categories reuse the lazily compiled
    /// built-ins; overridden ones are compiled here and fail on bad syntax.
    pub fn from_config(config: &RulesConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let patterns = if config.overrides_patterns() {
            config
                .effective_patterns()?
                .into_iter()
                .map(|(category, pattern)| CompiledPattern::compile(category, &pattern))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            patterns::default_compiled()
        };

        Ok(Self {
            patterns,
            keywords: config.effective_keywords(),
        })
    }

    pub fn categories(&self) -> Vec<Category> {
        self.patterns.iter().map(|p| p.category).collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_category() {
        let rules = RuleSet::defaults();
        assert_eq!(rules.categories(), Category::ALL.to_vec());
        assert!(rules.keywords.iter().any(|k| k == "date of birth"));
    }

    #[test]
    fn bad_override_reports_category() {
        let mut config = RulesConfig::default();
        config
            .patterns
            .insert("balance".to_string(), r"\$(\d+".to_string());
        let err = RuleSet::from_config(&config).unwrap_err();
        match err {
            ConfigError::InvalidPattern { category, .. } => assert_eq!(category, "balance"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
