//! Report output configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OUTPUT_FILE;

/// Report serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Where and how the batch report is written.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format. Default: csv.
    pub format: Option<ReportFormat>,
    /// Report path. Default: `compliance_analysis_results.csv`.
    pub path: Option<String>,
}

impl OutputConfig {
    pub fn effective_format(&self) -> ReportFormat {
        self.format.unwrap_or_default()
    }

    pub fn effective_path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_OUTPUT_FILE)
    }
}
