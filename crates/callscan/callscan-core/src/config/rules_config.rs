//! Detection rule tables: per-category patterns and verification keywords.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ACCOUNT_NUMBER_PATTERN, DEFAULT_BALANCE_PATTERN, DEFAULT_SSN_PATTERN,
    DEFAULT_VERIFICATION_KEYWORDS,
};
use crate::errors::ConfigError;
use crate::models::Category;

/// Replaceable rule set. Empty tables fall back to the compiled defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Pattern overrides keyed by category key (`balance`, `ssn`,
    /// `account_number`). Unlisted categories keep their default pattern.
    pub patterns: BTreeMap<String, String>,
    /// Category keys to skip entirely.
    pub disabled_categories: Vec<String>,
    /// Replacement verification keyword list. `None` keeps the defaults.
    pub keywords: Option<Vec<String>>,
}

impl RulesConfig {
    /// Built-in pattern for a category.
    pub fn default_pattern(category: Category) -> &'static str {
        match category {
            Category::Balance => DEFAULT_BALANCE_PATTERN,
            Category::Ssn => DEFAULT_SSN_PATTERN,
            Category::AccountNumber => DEFAULT_ACCOUNT_NUMBER_PATTERN,
        }
    }

    /// Whether any pattern or category setting differs from the defaults.
    pub fn overrides_patterns(&self) -> bool {
        !self.patterns.is_empty() || !self.disabled_categories.is_empty()
    }

    /// Effective `(category, pattern)` table in category order, with
    /// overrides applied and disabled categories removed.
    pub fn effective_patterns(&self) -> Result<Vec<(Category, String)>, ConfigError> {
        self.validate_keys()?;
        Ok(Category::ALL
            .into_iter()
            .filter(|c| !self.disabled_categories.iter().any(|d| d == c.key()))
            .map(|c| {
                let pattern = self
                    .patterns
                    .get(c.key())
                    .cloned()
                    .unwrap_or_else(|| Self::default_pattern(c).to_string());
                (c, pattern)
            })
            .collect())
    }

    /// Effective keyword list.
    pub fn effective_keywords(&self) -> Vec<String> {
        match &self.keywords {
            Some(keywords) => keywords.clone(),
            None => DEFAULT_VERIFICATION_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }

    /// Reject unknown category keys and blank keywords.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_keys()?;
        if let Some(keywords) = &self.keywords {
            if keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: "rules.keywords".to_string(),
                    message: "keywords must not be blank".to_string(),
                });
            }
        }
        Ok(())
    }

    fn validate_keys(&self) -> Result<(), ConfigError> {
        for key in self.patterns.keys() {
            if Category::parse_str(key).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("rules.patterns.{key}"),
                    message: "unknown category".to_string(),
                });
            }
        }
        for key in &self.disabled_categories {
            if Category::parse_str(key).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: "rules.disabled_categories".to_string(),
                    message: format!("unknown category '{key}'"),
                });
            }
        }
        Ok(())
    }
}
