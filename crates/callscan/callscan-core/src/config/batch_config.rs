//! Batch runner configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RECORD_EXTENSION;

/// Configuration for directory scans.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BatchConfig {
    /// Record file extension, without the dot. Default: "json".
    pub extension: Option<String>,
    /// Process records on a rayon pool. Default: true.
    pub parallel: Option<bool>,
    /// Worker threads for the pool. Default: rayon's global pool.
    pub threads: Option<usize>,
}

impl BatchConfig {
    pub fn effective_extension(&self) -> &str {
        self.extension.as_deref().unwrap_or(DEFAULT_RECORD_EXTENSION)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }
}
