use aho_corasick::AhoCorasick;
use callscan_core::errors::ConfigError;
use callscan_core::models::Conversation;

use crate::rules::RuleSet;

/// Decides whether an agent asked a verification question before a given turn.
///
/// Keywords are literal, lower-cased substrings; no stemming or fuzzy
/// matching. Only agent turns count as evidence.
#[derive(Debug, Clone)]
pub struct VerificationChecker {
    matcher: AhoCorasick,
    keyword_count: usize,
}

impl VerificationChecker {
    pub fn new<I, S>(keywords: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lowered: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        let matcher = AhoCorasick::new(&lowered).map_err(|e| ConfigError::ValidationFailed {
            field: "rules.keywords".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            matcher,
            keyword_count: lowered.len(),
        })
    }

    pub fn from_rules(rules: &RuleSet) -> Result<Self, ConfigError> {
        Self::new(&rules.keywords)
    }

    pub fn keyword_count(&self) -> usize {
        self.keyword_count
    }

    /// Whether `text` contains any keyword, ignoring case.
    pub fn is_verification_prompt(&self, text: &str) -> bool {
        self.matcher.is_match(&text.to_lowercase())
    }

    /// True if an agent turn strictly before `index` asked for verification.
    /// Always false for `index == 0`.
    pub fn verified_before(&self, conversation: &Conversation, index: usize) -> bool {
        self.first_verification_before(conversation, index).is_some()
    }

    /// Index of the first verifying agent turn before `index`. An `index`
    /// past the end scans the whole conversation.
    pub fn first_verification_before(
        &self,
        conversation: &Conversation,
        index: usize,
    ) -> Option<usize> {
        let end = index.min(conversation.len());
        let found = conversation.utterances()[..end]
            .iter()
            .enumerate()
            .find(|(_, u)| u.is_agent() && self.is_verification_prompt(&u.text));

        if let Some((i, u)) = found {
            tracing::debug!(turn = i, text = %u.text, "identity verification keyword detected");
        }
        found.map(|(i, _)| i)
    }
}
