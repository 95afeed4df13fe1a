//! Golden conversation tests: each fixture carries its expected flagged texts.

use callscan_core::models::Conversation;
use callscan_core::traits::IComplianceAnalyzer;
use callscan_privacy::ComplianceEngine;
use test_fixtures::{list_fixtures, load_fixture_value};

#[test]
fn golden_conversations() {
    let engine = ComplianceEngine::with_defaults().unwrap();
    let files = list_fixtures("golden/conversations");
    assert!(files.len() >= 6, "expected golden fixtures, got {}", files.len());

    for path in files {
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        let fixture = load_fixture_value(&format!("golden/conversations/{name}"));

        let conversation: Conversation =
            serde_json::from_value(fixture["conversation"].clone()).unwrap();
        let expected: Vec<String> =
            serde_json::from_value(fixture["expected_non_compliant"].clone()).unwrap();

        let result = engine.analyze(&conversation);
        assert_eq!(
            result.non_compliant_utterances, expected,
            "golden '{}' ({}) mismatch",
            name,
            fixture["description"].as_str().unwrap_or("?")
        );
    }
}
