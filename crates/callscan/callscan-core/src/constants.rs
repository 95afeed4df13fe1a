/// Currency amounts such as `$450` or `$1,000.50`.
pub const DEFAULT_BALANCE_PATTERN: &str = r"\$\d+(,\d+)*(\.\d+)?";

/// Social security numbers in `NNN-NN-NNNN` form.
pub const DEFAULT_SSN_PATTERN: &str = r"\d{3}-\d{2}-\d{4}";

/// Any standalone run of nine or more digits.
pub const DEFAULT_ACCOUNT_NUMBER_PATTERN: &str = r"\b\d{9,}\b";

/// Phrases that mark an agent turn as an identity-verification prompt.
/// Matched as lower-cased literal substrings.
pub const DEFAULT_VERIFICATION_KEYWORDS: &[&str] = &[
    "date of birth",
    "dob",
    "address",
    "current address",
    "social security number",
    "ssn",
    "account number",
    "account details",
    "identity",
    "verification",
    "security purpose",
];

/// Extension of per-call conversation records.
pub const DEFAULT_RECORD_EXTENSION: &str = "json";

/// Default report path written by `callscan scan`.
pub const DEFAULT_OUTPUT_FILE: &str = "compliance_analysis_results.csv";

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "callscan.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CALLSCAN_LOG";

/// Tracing filter used when `CALLSCAN_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "callscan=info";
