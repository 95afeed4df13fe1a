use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sensitive-information categories the detector knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Balance,
    Ssn,
    AccountNumber,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Balance, Category::Ssn, Category::AccountNumber];

    /// Stable key used in config tables and reports.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Ssn => "ssn",
            Self::AccountNumber => "account_number",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == s)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Matched substrings per category for a single utterance.
///
/// Every category the detector scanned for has an entry, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensitiveInfoFindings {
    matches: BTreeMap<Category, Vec<String>>,
}

impl SensitiveInfoFindings {
    /// Empty findings with a slot for each given category.
    pub fn for_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            matches: categories.into_iter().map(|c| (c, Vec::new())).collect(),
        }
    }

    pub fn record(&mut self, category: Category, found: impl IntoIterator<Item = String>) {
        self.matches.entry(category).or_default().extend(found);
    }

    pub fn get(&self, category: Category) -> &[String] {
        self.matches
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// True when any category matched at least once.
    pub fn has_findings(&self) -> bool {
        self.matches.values().any(|v| !v.is_empty())
    }

    pub fn total_matches(&self) -> usize {
        self.matches.values().map(Vec::len).sum()
    }

    /// Categories with at least one match, in key order.
    pub fn categories_found(&self) -> Vec<Category> {
        self.matches
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(c, _)| *c)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.matches.iter().map(|(c, v)| (*c, v.as_slice()))
    }
}
