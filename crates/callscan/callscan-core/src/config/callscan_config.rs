//! Top-level callscan configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BatchConfig, OutputConfig, ReportFormat, RulesConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CALLSCAN_*`)
/// 3. Config file (`--config` path, else `callscan.toml` in the root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CallscanConfig {
    pub rules: RulesConfig,
    pub batch: BatchConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub batch_threads: Option<usize>,
    pub batch_parallel: Option<bool>,
    pub batch_extension: Option<String>,
    pub output_format: Option<ReportFormat>,
    pub output_path: Option<String>,
}

impl CallscanConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_path` must exist. Without one, `callscan.toml` in
    /// `root` is used when present.
    pub fn load(
        root: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: config file
        match config_path {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CallscanConfig) -> Result<(), ConfigError> {
        config.rules.validate()?;
        if let Some(threads) = config.batch.threads {
            if threads == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "batch.threads".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(ref ext) = config.batch.extension {
            if ext.trim().is_empty() || ext.starts_with('.') {
                return Err(ConfigError::ValidationFailed {
                    field: "batch.extension".to_string(),
                    message: "must be a non-empty extension without a leading dot".to_string(),
                });
            }
        }
        if let Some(ref path) = config.output.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "output.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut CallscanConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CallscanConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), "merged config file");
        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value set.
    fn merge(base: &mut CallscanConfig, other: &CallscanConfig) {
        // Rules
        for (key, pattern) in &other.rules.patterns {
            base.rules.patterns.insert(key.clone(), pattern.clone());
        }
        if !other.rules.disabled_categories.is_empty() {
            base.rules.disabled_categories = other.rules.disabled_categories.clone();
        }
        if other.rules.keywords.is_some() {
            base.rules.keywords = other.rules.keywords.clone();
        }

        // Batch
        if other.batch.extension.is_some() {
            base.batch.extension = other.batch.extension.clone();
        }
        if other.batch.parallel.is_some() {
            base.batch.parallel = other.batch.parallel;
        }
        if other.batch.threads.is_some() {
            base.batch.threads = other.batch.threads;
        }

        // Output
        if other.output.format.is_some() {
            base.output.format = other.output.format;
        }
        if other.output.path.is_some() {
            base.output.path = other.output.path.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CALLSCAN_BATCH_THREADS`, `CALLSCAN_OUTPUT_FORMAT`, etc.
    /// Unparseable values are ignored with a warning.
    fn apply_env_overrides(config: &mut CallscanConfig) {
        if let Ok(val) = std::env::var("CALLSCAN_BATCH_THREADS") {
            match val.parse::<usize>() {
                Ok(v) => config.batch.threads = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring invalid CALLSCAN_BATCH_THREADS"),
            }
        }
        if let Ok(val) = std::env::var("CALLSCAN_BATCH_PARALLEL") {
            match val.parse::<bool>() {
                Ok(v) => config.batch.parallel = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring invalid CALLSCAN_BATCH_PARALLEL"),
            }
        }
        if let Ok(val) = std::env::var("CALLSCAN_BATCH_EXTENSION") {
            config.batch.extension = Some(val);
        }
        if let Ok(val) = std::env::var("CALLSCAN_OUTPUT_FORMAT") {
            match ReportFormat::parse_str(&val) {
                Some(v) => config.output.format = Some(v),
                None => tracing::warn!(value = %val, "ignoring invalid CALLSCAN_OUTPUT_FORMAT"),
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CallscanConfig, cli: &CliOverrides) {
        if let Some(v) = cli.batch_threads {
            config.batch.threads = Some(v);
        }
        if let Some(v) = cli.batch_parallel {
            config.batch.parallel = Some(v);
        }
        if let Some(ref v) = cli.batch_extension {
            config.batch.extension = Some(v.clone());
        }
        if let Some(v) = cli.output_format {
            config.output.format = Some(v);
        }
        if let Some(ref v) = cli.output_path {
            config.output.path = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
