use callscan_core::models::*;
use proptest::prelude::*;

#[test]
fn findings_keep_empty_slots() {
    let findings = SensitiveInfoFindings::for_categories(Category::ALL);
    assert!(!findings.has_findings());
    assert_eq!(findings.iter().count(), 3);
    assert!(findings.get(Category::Ssn).is_empty());
}

#[test]
fn findings_serialize_with_category_keys() {
    let mut findings = SensitiveInfoFindings::for_categories(Category::ALL);
    findings.record(Category::Balance, vec!["$450".to_string()]);
    let json = serde_json::to_value(&findings).unwrap();
    assert_eq!(json["balance"][0], "$450");
    assert_eq!(json["account_number"].as_array().unwrap().len(), 0);
    assert_eq!(findings.categories_found(), vec![Category::Balance]);
}

#[test]
fn report_projects_only_unverified_disclosures() {
    let report = ComplianceReport {
        disclosures: vec![
            Disclosure {
                index: 0,
                text: "first".into(),
                findings: SensitiveInfoFindings::default(),
                verified_by: None,
            },
            Disclosure {
                index: 3,
                text: "second".into(),
                findings: SensitiveInfoFindings::default(),
                verified_by: Some(1),
            },
        ],
    };
    assert!(!report.is_compliant());
    assert_eq!(report.result().non_compliant_utterances, vec!["first"]);
}

#[test]
fn batch_report_counts() {
    let report = BatchReport::new(
        vec![
            CallReport {
                call_id: "a".into(),
                non_compliant_utterances: vec!["x".into(), "y".into()],
            },
            CallReport {
                call_id: "b".into(),
                non_compliant_utterances: vec![],
            },
        ],
        vec![],
    );
    assert_eq!(report.total_calls(), 2);
    assert_eq!(report.non_compliant_calls(), 1);
    assert_eq!(report.flagged_utterances(), 2);
    assert!(report.row("b").is_some());
}

#[test]
fn category_keys_parse_back() {
    for c in Category::ALL {
        assert_eq!(Category::parse_str(c.key()), Some(c));
    }
    assert_eq!(Category::parse_str("iban"), None);
}

proptest! {
    #[test]
    fn unknown_speaker_labels_never_decode_as_agent(label in "[a-zA-Z ]{0,12}") {
        prop_assume!(label != "Agent");
        let speaker = Speaker::from(label);
        prop_assert!(!speaker.is_agent());
    }
}
