//! Tests for the callscan configuration system.

use std::sync::Mutex;

use callscan_core::config::{CallscanConfig, CliOverrides, ReportFormat, RulesConfig};
use callscan_core::constants::DEFAULT_VERIFICATION_KEYWORDS;
use callscan_core::errors::ConfigError;
use callscan_core::models::Category;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_callscan_env_vars() {
    for key in [
        "CALLSCAN_BATCH_THREADS",
        "CALLSCAN_BATCH_PARALLEL",
        "CALLSCAN_BATCH_EXTENSION",
        "CALLSCAN_OUTPUT_FORMAT",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn layered_resolution_prefers_cli_then_env_then_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_callscan_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("callscan.toml"),
        r#"
[batch]
threads = 2
extension = "txt"

[output]
format = "json"
"#,
    )
    .unwrap();

    std::env::set_var("CALLSCAN_BATCH_THREADS", "6");

    let cli = CliOverrides {
        output_format: Some(ReportFormat::Csv),
        ..Default::default()
    };
    let config = CallscanConfig::load(dir.path(), None, Some(&cli)).unwrap();
    clear_callscan_env_vars();

    assert_eq!(config.batch.threads, Some(6), "env beats file");
    assert_eq!(config.batch.effective_extension(), "txt", "file beats default");
    assert_eq!(config.output.effective_format(), ReportFormat::Csv, "cli beats file");
}

#[test]
fn defaults_without_any_layer() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_callscan_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = CallscanConfig::load(dir.path(), None, None).unwrap();

    assert_eq!(config.batch.effective_extension(), "json");
    assert!(config.batch.effective_parallel());
    assert_eq!(config.output.effective_format(), ReportFormat::Csv);
    assert_eq!(
        config.output.effective_path(),
        "compliance_analysis_results.csv"
    );
    assert_eq!(
        config.rules.effective_keywords().len(),
        DEFAULT_VERIFICATION_KEYWORDS.len()
    );
}

#[test]
fn explicit_config_path_must_exist() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_callscan_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = CallscanConfig::load(dir.path(), Some(&missing), None).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn invalid_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_callscan_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::env::set_var("CALLSCAN_BATCH_PARALLEL", "sometimes");
    let config = CallscanConfig::load(dir.path(), None, None).unwrap();
    clear_callscan_env_vars();

    assert_eq!(config.batch.parallel, None);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = CallscanConfig::from_toml("[batch\nthreads = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_threads_fails_validation() {
    let config = CallscanConfig::from_toml("[batch]\nthreads = 0\n").unwrap();
    let err = CallscanConfig::validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "batch.threads"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_pattern_category_fails_validation() {
    let config = CallscanConfig::from_toml(
        r#"
[rules.patterns]
iban = "[A-Z]{2}\\d{2}"
"#,
    )
    .unwrap();
    assert!(CallscanConfig::validate(&config).is_err());
}

#[test]
fn blank_keyword_fails_validation() {
    let config = CallscanConfig::from_toml("[rules]\nkeywords = [\"dob\", \"  \"]\n").unwrap();
    assert!(CallscanConfig::validate(&config).is_err());
}

#[test]
fn pattern_overrides_and_disabled_categories() {
    let rules = RulesConfig {
        patterns: [("ssn".to_string(), r"\d{9}".to_string())].into_iter().collect(),
        disabled_categories: vec!["balance".to_string()],
        keywords: None,
    };
    let table = rules.effective_patterns().unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table[0], (Category::Ssn, r"\d{9}".to_string()));
    assert_eq!(table[1].0, Category::AccountNumber);
    assert_eq!(
        table[1].1,
        RulesConfig::default_pattern(Category::AccountNumber)
    );
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = CallscanConfig::default();
    config.batch.threads = Some(4);
    config.rules.keywords = Some(vec!["date of birth".to_string()]);
    let text = config.to_toml().unwrap();
    let back = CallscanConfig::from_toml(&text).unwrap();
    assert_eq!(back.batch.threads, Some(4));
    assert_eq!(back.rules.effective_keywords(), vec!["date of birth"]);
}
