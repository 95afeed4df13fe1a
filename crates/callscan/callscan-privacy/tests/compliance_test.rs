use callscan_core::config::RulesConfig;
use callscan_core::models::{Category, Conversation, Speaker};
use callscan_core::traits::{IComplianceAnalyzer, ISensitiveDetector};
use callscan_privacy::ComplianceEngine;
use test_fixtures::conversation;

use Speaker::{Agent, Customer};

fn engine() -> ComplianceEngine {
    ComplianceEngine::with_defaults().unwrap()
}

// ── Disclosure without verification is flagged ────────────────────────────

#[test]
fn disclosure_without_verification_is_flagged() {
    let conv = conversation(&[(Agent, "Your balance is $450")]);
    let result = engine().analyze(&conv);
    assert_eq!(result.non_compliant_utterances, vec!["Your balance is $450"]);
}

// ── Verification before disclosure excuses it ─────────────────────────────

#[test]
fn verification_before_disclosure_is_not_flagged() {
    let conv = conversation(&[
        (Agent, "Can you verify your date of birth?"),
        (Customer, "Sure, it's 4th of May 1980."),
        (Agent, "Your balance is $450"),
    ]);
    let result = engine().analyze(&conv);
    assert!(result.is_compliant(), "got {:?}", result);
}

// ── Verification after disclosure does not count ──────────────────────────

#[test]
fn verification_after_disclosure_does_not_excuse_it() {
    let conv = conversation(&[
        (Agent, "Your SSN on file is 123-45-6789"),
        (Agent, "Can you confirm your date of birth?"),
    ]);
    let result = engine().analyze(&conv);
    assert_eq!(
        result.non_compliant_utterances,
        vec!["Your SSN on file is 123-45-6789"]
    );
}

// ── Customer turns are neither flagged nor evidence ───────────────────────

#[test]
fn customer_disclosures_are_never_flagged() {
    let conv = conversation(&[
        (Customer, "My account number is 123456789 and I owe $90"),
        (Customer, "My SSN is 123-45-6789"),
    ]);
    assert!(engine().analyze(&conv).is_compliant());
}

#[test]
fn customer_verification_phrasing_is_not_evidence() {
    let conv = conversation(&[
        (Customer, "Do you need my date of birth for verification?"),
        (Agent, "Your balance is $1,000.50"),
    ]);
    let report = engine().analyze_detailed(&conv);
    assert_eq!(report.disclosures.len(), 1);
    assert_eq!(report.disclosures[0].verified_by, None);
    assert_eq!(
        report.result().non_compliant_utterances,
        vec!["Your balance is $1,000.50"]
    );
}

// ── No sensitive info, no flag ────────────────────────────────────────────

#[test]
fn turns_without_sensitive_info_are_never_flagged() {
    let conv = conversation(&[
        (Agent, "Hello, is this a good time to talk?"),
        (Agent, "We'd like to discuss a payment plan."),
    ]);
    let report = engine().analyze_detailed(&conv);
    assert!(report.disclosures.is_empty());
    assert!(report.is_compliant());
}

// ── Empty conversation ────────────────────────────────────────────────────

#[test]
fn empty_conversation_yields_empty_result() {
    let result = engine().analyze(&Conversation::default());
    assert!(result.non_compliant_utterances.is_empty());
}

// ── Idempotence and order ─────────────────────────────────────────────────

#[test]
fn analysis_is_idempotent_and_ordered() {
    let conv = conversation(&[
        (Agent, "Account 123456789 is open"),
        (Agent, "You owe $20"),
        (Agent, "Please confirm your identity"),
        (Agent, "SSN 123-45-6789 matches"),
        (Agent, "Total $40"),
    ]);
    let engine = engine();
    let first = engine.analyze(&conv);
    let second = engine.analyze(&conv);
    assert_eq!(first, second);
    assert_eq!(
        first.non_compliant_utterances,
        vec!["Account 123456789 is open", "You owe $20"]
    );
}

// ── Detailed report carries evidence ──────────────────────────────────────

#[test]
fn detailed_report_points_at_verifying_turn() {
    let conv = conversation(&[
        (Agent, "Hi there"),
        (Agent, "For verification, what's your current address?"),
        (Customer, "12 Elm Street"),
        (Agent, "Your SSN ends 123-45-6789 and your balance is $12.50"),
    ]);
    let report = engine().analyze_detailed(&conv);
    assert_eq!(report.disclosures.len(), 1);
    let d = &report.disclosures[0];
    assert_eq!(d.index, 3);
    assert_eq!(d.verified_by, Some(1));
    assert_eq!(d.findings.get(Category::Ssn), ["123-45-6789"]);
    assert_eq!(d.findings.get(Category::Balance), ["$12.50"]);
}

// ── Configured rules replace the built-ins ────────────────────────────────

#[test]
fn configured_keywords_replace_defaults() {
    let config = RulesConfig {
        keywords: Some(vec!["mother's maiden name".to_string()]),
        ..Default::default()
    };
    let engine = ComplianceEngine::from_config(&config).unwrap();

    let conv = conversation(&[
        (Agent, "Can you verify your date of birth?"),
        (Agent, "Your balance is $450"),
    ]);
    assert_eq!(
        engine.analyze(&conv).non_compliant_utterances,
        vec!["Your balance is $450"],
        "date of birth is no longer a verification keyword"
    );

    let conv = conversation(&[
        (Agent, "What is your Mother's Maiden Name?"),
        (Agent, "Your balance is $450"),
    ]);
    assert!(engine.analyze(&conv).is_compliant());
}

#[test]
fn configured_patterns_replace_defaults() {
    let mut config = RulesConfig::default();
    config
        .patterns
        .insert("account_number".to_string(), r"\bACC-\d{4}\b".to_string());
    config.disabled_categories.push("balance".to_string());
    let engine = ComplianceEngine::from_config(&config).unwrap();

    let findings = engine.detector().detect("ACC-1234 owes $450, ref 123456789");
    assert_eq!(findings.get(Category::AccountNumber), ["ACC-1234"]);
    assert!(findings.get(Category::Balance).is_empty());
    assert_eq!(findings.iter().count(), 2, "disabled category has no slot");
}

#[test]
fn invalid_configured_pattern_is_rejected() {
    let mut config = RulesConfig::default();
    config.patterns.insert("ssn".to_string(), "(".to_string());
    assert!(ComplianceEngine::from_config(&config).is_err());
}
