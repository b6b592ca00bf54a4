// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use super::program;
use crate::error::AutonexError;
use crate::policy::{validate_policy, Policy, PolicyBuilder};
use crate::types::id::ProgramId;

#[test]
fn test_missing_policy() {
    assert_eq!(validate_policy(None).unwrap_err(), AutonexError::PolicyMissing);
}

#[test]
fn test_requires_protocol_allowlist() {
    let policy = PolicyBuilder::new().allow_methods(["swap"]).build();
    let err = validate_policy(Some(&policy)).unwrap_err();
    assert_eq!(err.code(), "POLICY_INVALID");
    assert!(err.to_string().contains("allowProtocols"));
}

#[test]
fn test_empty_protocol_allowlist_rejected_regardless_of_other_rules() {
    let policy = PolicyBuilder::new()
        .max_tx_amount(10)
        .daily_limit(100)
        .max_slippage(30)
        .time_window(9, 17)
        .max_risk_score(5)
        .allow_methods(["swap"])
        .allow_protocols(Vec::<ProgramId>::new())
        .build();

    let err = validate_policy(Some(&policy)).unwrap_err();
    assert_eq!(err.code(), "POLICY_INVALID");
}

#[test]
fn test_minimal_valid_policy() {
    let policy = PolicyBuilder::new().allow_protocols([program(1)]).build();
    assert_eq!(validate_policy(Some(&policy)).unwrap(), &policy);
}

#[test]
fn test_slippage_must_be_non_negative() {
    let ok = PolicyBuilder::new().allow_protocols([program(1)]).max_slippage(0).build();
    validate_policy(Some(&ok)).unwrap();

    let bad = PolicyBuilder::new().allow_protocols([program(1)]).max_slippage(-1).build();
    let err = validate_policy(Some(&bad)).unwrap_err();
    assert_eq!(err, AutonexError::PolicyInvalid("maxSlippageBps must be a non-negative integer".into()));
}

#[test]
fn test_time_window_bounds() {
    for (start, end) in [(0, 23), (23, 0), (12, 12)] {
        let policy = PolicyBuilder::new().allow_protocols([program(1)]).time_window(start, end).build();
        validate_policy(Some(&policy)).unwrap();
    }

    for (start, end) in [(-1, 5), (0, 24), (24, 24)] {
        let policy = PolicyBuilder::new().allow_protocols([program(1)]).time_window(start, end).build();
        let err = validate_policy(Some(&policy)).unwrap_err();
        assert_eq!(err.code(), "POLICY_INVALID", "window {start}..{end}");
    }
}

#[test]
fn test_canonical_message_layout() {
    let policy = PolicyBuilder::new()
        .allow_protocols([program(2)])
        .max_tx_amount(5)
        .build();

    let expected = format!(
        r#"{{"financialRules":{{"dailyLimitLamports":null,"maxSlippageBps":null,"maxTxAmountLamports":"5"}},"protocolRules":{{"allowMethods":[],"allowProtocols":["{}"]}},"riskRules":{{"maxRiskScore":null}},"timeRules":null}}"#,
        "02".repeat(32)
    );
    assert_eq!(String::from_utf8(policy.canonical_message()).unwrap(), expected);
}

#[test]
fn test_lamports_render_as_decimal_strings() {
    let policy = PolicyBuilder::new()
        .allow_protocols([program(2)])
        .daily_limit(u64::MAX)
        .build();
    let text = String::from_utf8(policy.canonical_message()).unwrap();
    assert!(text.contains(r#""dailyLimitLamports":"18446744073709551615""#));
}

#[test]
fn test_time_window_presence_changes_hash() {
    let base = PolicyBuilder::new().allow_protocols([program(2)]);
    let without = base.clone().build();
    let with = base.time_window(0, 23).build();

    assert_ne!(without.hash(), with.hash());
    let text = String::from_utf8(with.canonical_message()).unwrap();
    assert!(text.contains(r#""timeRules":{"endHourUtc":23,"startHourUtc":0}"#));
}

#[test]
fn test_hash_independent_of_builder_order() {
    let a = PolicyBuilder::new()
        .allow_methods(["swap", "stake"])
        .allow_protocols([program(2), program(3)])
        .max_risk_score(7)
        .build();
    let b = PolicyBuilder::new()
        .max_risk_score(7)
        .allow_protocols([program(2), program(3)])
        .allow_methods(["swap", "stake"])
        .build();

    assert_eq!(a.hash(), b.hash());
}

#[test]
fn test_allowlist_order_is_significant() {
    let a = PolicyBuilder::new().allow_protocols([program(2), program(3)]).build();
    let b = PolicyBuilder::new().allow_protocols([program(3), program(2)]).build();
    assert_ne!(a.hash(), b.hash());
}

#[test]
fn test_policy_from_json() {
    let json = format!(
        r#"{{"protocolRules":{{"allowProtocols":["{}"],"allowMethods":["swap"]}},"timeRules":{{"timeWindow":{{"startHourUtc":8,"endHourUtc":20}}}}}}"#,
        "02".repeat(32)
    );
    let policy: Policy = serde_json::from_str(&json).unwrap();

    assert_eq!(policy.protocol_rules.allow_protocols, Some(vec![program(2)]));
    assert_eq!(policy.financial_rules.max_tx_amount_lamports, None);
    validate_policy(Some(&policy)).unwrap();

    let rebuilt = PolicyBuilder::new()
        .allow_protocols([program(2)])
        .allow_methods(["swap"])
        .time_window(8, 20)
        .build();
    assert_eq!(policy.hash(), rebuilt.hash());
}
