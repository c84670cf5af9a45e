use super::*;
use crate::models::{Abi, AbiInput, InnerParameters, ProofDescription, ProofEntry};
use serde_json::json;

fn proof(label: &str, inputs: &[&str], params: &[&str]) -> ProofEntry {
    ProofEntry {
        description: ProofDescription {
            description: Some(label.to_string()),
            abi: Abi {
                inputs: inputs.iter().map(|name| AbiInput::named(*name)).collect(),
            },
            inner_parameters: params
                .iter()
                .map(|name| (*name, json!({ "label": name })))
                .collect::<InnerParameters>(),
        },
    }
}

fn check(document: &ConfigDocument) -> Vec<Diagnostic> {
    ConfigCrossChecker::new().check(document).collect()
}

#[test]
fn test_renamed_input_suggests_positional_key() {
    let document = ConfigDocument::new(
        "transfer.json",
        vec![proof(
            "Transfer",
            &["from", "to", "amount"],
            &["sender", "to", "amount"],
        )],
    );

    let diagnostics = check(&document);

    assert_eq!(
        diagnostics,
        vec![Diagnostic {
            document: "transfer.json".to_string(),
            proof_label: "Transfer".to_string(),
            proof_index: 0,
            input_index: 0,
            missing: "from".to_string(),
            suggestion: Some("sender".to_string()),
        }]
    );
}

#[test]
fn test_empty_inner_parameters_suggest_none() {
    let document = ConfigDocument::new("owner.json", vec![proof("Ownership", &["owner"], &[])]);

    let diagnostics = check(&document);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].missing, "owner");
    assert_eq!(diagnostics[0].suggestion, None);
    assert_eq!(diagnostics[0].suggestion_or_none(), "none");
}

#[test]
fn test_no_inputs_produce_no_diagnostics() {
    let document = ConfigDocument::new("noop.json", vec![proof("Noop", &[], &["x"])]);

    assert!(check(&document).is_empty());
}

#[test]
fn test_every_violation_is_reported_in_order() {
    let document = ConfigDocument::new(
        "multi.json",
        vec![
            proof("First", &["a", "b", "c"], &["x", "b"]),
            proof("Second", &["d"], &["d"]),
            proof("Third", &["e", "f"], &[]),
        ],
    );

    let found: Vec<_> = check(&document)
        .into_iter()
        .map(|d| (d.proof_index, d.input_index, d.missing, d.suggestion))
        .collect();

    assert_eq!(
        found,
        vec![
            (0, 0, "a".to_string(), Some("x".to_string())),
            (0, 2, "c".to_string(), None),
            (2, 0, "e".to_string(), None),
            (2, 1, "f".to_string(), None),
        ]
    );
}

#[test]
fn test_membership_is_not_positional() {
    // Same names, different order: nothing is missing
    let document = ConfigDocument::new(
        "shuffled.json",
        vec![proof("Shuffled", &["a", "b", "c"], &["c", "a", "b"])],
    );

    assert!(check(&document).is_empty());
}

#[test]
fn test_check_is_deterministic() {
    let document = ConfigDocument::new(
        "stable.json",
        vec![proof("Stable", &["p", "q", "r"], &["q", "x"])],
    );
    let checker = ConfigCrossChecker::new();

    let first: Vec<_> = checker.check(&document).collect();
    let second: Vec<_> = checker.check(&document).collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_check_is_lazy() {
    let document = ConfigDocument::new("lazy.json", vec![proof("Lazy", &["a", "b", "c"], &[])]);
    let checker = ConfigCrossChecker::new();
    let mut diagnostics = checker.check(&document);

    assert_eq!(diagnostics.next().map(|d| d.missing), Some("a".to_string()));
    assert_eq!(diagnostics.next().map(|d| d.missing), Some("b".to_string()));
}

#[test]
fn test_display_matches_report_line() {
    let diagnostic = Diagnostic {
        document: "tokens.json".to_string(),
        proof_label: "Approve spender".to_string(),
        proof_index: 0,
        input_index: 1,
        missing: "spender".to_string(),
        suggestion: None,
    };

    assert_eq!(
        diagnostic.to_string(),
        "File tokens.json has missing inner parameter \"spender\" for Approve spender. Did you mean \"none\"?"
    );
}

#[test]
fn test_check_json_types_then_checks() {
    let value = json!({
        "merkle_proofs": [{
            "description": {
                "description": "Mint",
                "abi": { "inputs": [{ "name": "recipient", "type": "address" }] },
                "innerParameters": { "to": {} }
            }
        }]
    });

    let diagnostics = ConfigCrossChecker::new()
        .check_json("mint.json", &value)
        .unwrap();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].suggestion.as_deref(), Some("to"));
}

#[test]
fn test_check_json_rejects_malformed_document() {
    let value = json!({ "merkle_proofs": [{ "description": { "innerParameters": {} } }] });

    let err = ConfigCrossChecker::new()
        .check_json("broken.json", &value)
        .unwrap_err();

    assert_eq!(err.document, "broken.json");
    assert_eq!(err.field, "merkle_proofs[0].description.abi");
}
