//! Policy document assembly and parsing through the public API

use crate::common::PolicyFactory;
use crate::{assert_err, assert_ok};
use alicloud_ram::{
    ASSUME_ROLE_ACTION, DEFAULT_POLICY_VERSION, Effect, Policy, PolicyError, PolicyStatement,
    Principal, RolePolicy, RolePolicyStatement, assemble_policy_document,
    assemble_role_policy_document, parse_policy_document, parse_role_policy_document,
    principals_from_values, statements_from_values,
};
use serde_json::json;

#[test]
fn test_role_policy_assemble_then_parse() {
    let json = assert_ok!(assemble_role_policy_document(
        ["acs:ram::111:root", "acs:ram::222:root"],
        ["ecs.aliyuncs.com", "fc.aliyuncs.com"],
        DEFAULT_POLICY_VERSION,
    ));

    let expected = RolePolicy::new(
        "1",
        vec![RolePolicyStatement {
            effect: Effect::Allow,
            action: ASSUME_ROLE_ACTION.to_string(),
            principal: Principal::new(
                vec!["ecs.aliyuncs.com".to_string(), "fc.aliyuncs.com".to_string()],
                vec!["acs:ram::111:root".to_string(), "acs:ram::222:root".to_string()],
            ),
        }],
    );
    assert_eq!(assert_ok!(parse_role_policy_document(&json)), expected);
}

#[test]
fn test_policy_assemble_then_parse() {
    let specs = vec![PolicyFactory::oss_read(), PolicyFactory::deny_delete()];
    let json = assert_ok!(assemble_policy_document(&specs, "1"));
    let policy = assert_ok!(parse_policy_document(&json));

    let expected = Policy::new(
        "1",
        specs.into_iter().map(PolicyStatement::from).collect(),
    );
    assert_eq!(policy, expected);
}

#[test]
fn test_policy_encode_decode_round_trip() {
    let original = Policy::new(
        "2023-01-01",
        vec![PolicyStatement {
            effect: Effect::Deny,
            action: vec!["ecs:Stop*".to_string(), "ecs:Delete*".to_string()],
            resource: vec!["*".to_string()],
        }],
    );

    let json = serde_json::to_string(&original).unwrap();
    assert_eq!(assert_ok!(parse_policy_document(&json)), original);
}

#[test]
fn test_action_order_is_preserved() {
    let descriptors = vec![PolicyFactory::descriptor("Allow", &["x", "y"], &["r"])];
    let specs = assert_ok!(statements_from_values(&descriptors));
    let json = assert_ok!(assemble_policy_document(&specs, "1"));
    let policy = assert_ok!(parse_policy_document(&json));

    assert_eq!(policy.statement[0].action, vec!["x", "y"]);
}

#[test]
fn test_loose_descriptor_example() {
    let descriptors = vec![PolicyFactory::descriptor("Allow", &["oss:Get"], &["acme:*"])];
    let specs = assert_ok!(statements_from_values(&descriptors));
    let policy = assert_ok!(parse_policy_document(&assert_ok!(
        assemble_policy_document(&specs, "1")
    )));

    assert_eq!(policy.version, "1");
    assert_eq!(policy.statement.len(), 1);
    assert_eq!(policy.statement[0].effect, Effect::Allow);
    assert_eq!(policy.statement[0].action, vec!["oss:Get"]);
    assert_eq!(policy.statement[0].resource, vec!["acme:*"]);
}

#[test]
fn test_one_bad_descriptor_fails_the_batch() {
    let descriptors = vec![
        PolicyFactory::descriptor("Allow", &["oss:Get"], &["acme:*"]),
        json!({"effect": "Allow", "action": ["oss:Put"], "resource": "acme:*"}),
    ];

    let error = assert_err!(statements_from_values(&descriptors));
    assert!(
        matches!(error, PolicyError::TypeMismatch { ref field, .. } if field == "document[1].resource")
    );
}

#[test]
fn test_loose_principals_feed_the_assembler() {
    let ram = assert_ok!(principals_from_values("ram_users", &[json!("acct:123")]));
    let service = assert_ok!(principals_from_values("services", &[json!("ecs.aliyuncs.com")]));

    let json = assert_ok!(assemble_role_policy_document(ram, service, "1"));
    let policy = assert_ok!(parse_role_policy_document(&json));
    assert_eq!(policy.statement[0].principal.ram, vec!["acct:123"]);
    assert_eq!(policy.statement[0].principal.service, vec!["ecs.aliyuncs.com"]);

    let error = assert_err!(principals_from_values("services", &[json!(42)]));
    assert!(matches!(error, PolicyError::TypeMismatch { .. }));
}

#[test]
fn test_malformed_documents() {
    for document in ["{not json", "", "42", r#"{"Statement":"x"}"#] {
        assert!(matches!(
            parse_role_policy_document(document),
            Err(PolicyError::Decode { .. })
        ));
        assert!(matches!(
            parse_policy_document(document),
            Err(PolicyError::Decode { .. })
        ));
    }
}
