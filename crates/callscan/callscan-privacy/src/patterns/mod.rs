//! Built-in sensitive-information patterns and pattern compilation.

use std::sync::LazyLock;

use callscan_core::constants::{
    DEFAULT_ACCOUNT_NUMBER_PATTERN, DEFAULT_BALANCE_PATTERN, DEFAULT_SSN_PATTERN,
};
use callscan_core::errors::ConfigError;
use callscan_core::models::Category;
use regex::Regex;

/// A built-in pattern, compiled on first use.
pub struct SensitivePattern {
    pub category: Category,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! sensitive_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Balance: $450, $1,000, $1,000.50 ──────────────────────────────────────
sensitive_pattern!(RE_BALANCE, DEFAULT_BALANCE_PATTERN);

// ── SSN: 123-45-6789 ───────────────────────────────────────────────────────
sensitive_pattern!(RE_SSN, DEFAULT_SSN_PATTERN);

// ── Account number: 9+ digit run ──────────────────────────────────────────
sensitive_pattern!(RE_ACCOUNT_NUMBER, DEFAULT_ACCOUNT_NUMBER_PATTERN);

/// All built-in patterns in category order.
pub fn all_patterns() -> Vec<SensitivePattern> {
    vec![
        SensitivePattern {
            category: Category::Balance,
            regex: &RE_BALANCE,
        },
        SensitivePattern {
            category: Category::Ssn,
            regex: &RE_SSN,
        },
        SensitivePattern {
            category: Category::AccountNumber,
            regex: &RE_ACCOUNT_NUMBER,
        },
    ]
}

/// A pattern ready for matching.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub category: Category,
    pub regex: Regex,
}

impl CompiledPattern {
    /// Compile a configured pattern string.
    pub fn compile(category: Category, pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
            category: category.key().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { category, regex })
    }

    /// All non-overlapping matches in `text`, leftmost first.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// The built-in patterns that compiled. A pattern that failed to compile is
/// logged and left out rather than taking the scanner down.
pub fn default_compiled() -> Vec<CompiledPattern> {
    all_patterns()
        .into_iter()
        .filter_map(|p| match p.regex.as_ref() {
            Some(regex) => Some(CompiledPattern {
                category: p.category,
                regex: regex.clone(),
            }),
            None => {
                tracing::error!(category = %p.category, "built-in pattern failed to compile");
                None
            }
        })
        .collect()
}
