//! Configuration system for callscan.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod batch_config;
pub mod callscan_config;
pub mod output_config;
pub mod rules_config;

pub use batch_config::BatchConfig;
pub use callscan_config::{CallscanConfig, CliOverrides};
pub use output_config::{OutputConfig, ReportFormat};
pub use rules_config::RulesConfig;
