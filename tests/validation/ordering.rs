//! Diagnostic ordering and concurrent validation tests.
//!
//! Diagnostics follow schema declaration order, depth first, with a record's
//! unknown keys and record-level rules after its attributes. The concurrent
//! pass must produce exactly the same sequence.

use super::*;

use admin_schema::{
    AttributeValue, Diagnostics, Operation, SchemaRegistry, ValidationConfig, ValidationContext,
};
use serde_json::{Value, json};

/// A user configuration with violations spread across the whole schema.
fn broken_user() -> Value {
    json!({
        "id": "118234567890",
        "password": "short",
        "hash_function": "bcrypt",
        "suspended": "no",
        "name": {"family_name": "", "nickname": "Babs"},
        "emails": [{"address": "a@example.com", "type": "mobile"}],
        "phones": [{"type": "work"}],
        "websites": [{"type": "blog", "value": "https://example.com", "rank": 1}],
        "favourite_colour": "teal"
    })
}

fn sequential(registry: &SchemaRegistry, value: &Value) -> Diagnostics {
    registry
        .validate_resource(
            &AttributeValue::from(value.clone()),
            &ValidationContext::create("user"),
        )
        .unwrap()
}

fn concurrent(registry: &SchemaRegistry, value: &Value) -> Diagnostics {
    registry
        .validate_resource_concurrently(
            &AttributeValue::from(value.clone()),
            &ValidationContext::create("user"),
        )
        .unwrap()
}

#[test]
fn test_declaration_order() {
    let diagnostics = sequential(&registry(), &broken_user());

    assert_eq!(
        paths(&diagnostics),
        vec![
            "id",
            "primary_email",
            "password",
            "hash_function",
            "suspended",
            "name.family_name",
            "name.given_name",
            "name.nickname",
            "emails[0].type",
            "phones[0].value",
            "websites[0].rank",
            "favourite_colour",
        ]
    );
}

#[test]
fn test_repeated_validation_is_stable() {
    let registry = registry();
    let first = sequential(&registry, &broken_user());
    for _ in 0..5 {
        assert_eq!(sequential(&registry, &broken_user()), first);
    }
}

#[test]
fn test_concurrent_matches_sequential() {
    for threads in [1, 2, 3, 8] {
        let registry = crate::common::registry_with(ValidationConfig::default().with_max_threads(threads));
        assert_eq!(
            concurrent(&registry, &broken_user()),
            sequential(&registry, &broken_user()),
            "with {threads} threads"
        );
    }
}

#[test]
fn test_concurrent_samples_are_valid() {
    let registry = registry();
    for (type_name, sample) in samples::all() {
        let diagnostics = registry
            .validate_resource_concurrently(
                &AttributeValue::from(sample),
                &ValidationContext::new(type_name, Operation::Update),
            )
            .unwrap();
        assert!(diagnostics.is_empty(), "{type_name}: {diagnostics:#?}");
    }
}

#[test]
fn test_concurrent_record_rules_come_last() {
    let registry = registry();
    let member = GroupMemberBuilder::new()
        .with_email("jdoe@example.com")
        .with_member_id("112233")
        .with_role("GUEST")
        .build();
    let context = ValidationContext::create("group_member");

    let diagnostics = registry.validate_resource_concurrently(&member, &context).unwrap();
    assert_eq!(paths(&diagnostics), vec!["role", "email"]);
    assert_eq!(
        diagnostics,
        registry.validate_resource(&member, &context).unwrap()
    );
}
