use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One output row: a call and its flagged utterances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallReport {
    pub call_id: String,
    pub non_compliant_utterances: Vec<String>,
}

/// A record the batch could not decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub call_id: String,
    pub path: String,
    pub code: String,
    pub reason: String,
}

/// Everything a batch run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<CallReport>,
    pub skipped: Vec<SkippedRecord>,
}

impl BatchReport {
    pub fn new(rows: Vec<CallReport>, skipped: Vec<SkippedRecord>) -> Self {
        Self {
            generated_at: Utc::now(),
            rows,
            skipped,
        }
    }

    pub fn total_calls(&self) -> usize {
        self.rows.len()
    }

    pub fn non_compliant_calls(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| !r.non_compliant_utterances.is_empty())
            .count()
    }

    pub fn flagged_utterances(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.non_compliant_utterances.len())
            .sum()
    }

    pub fn row(&self, call_id: &str) -> Option<&CallReport> {
        self.rows.iter().find(|r| r.call_id == call_id)
    }
}
