//! Structural validation tests: presence, read-only attributes, value kinds,
//! set uniqueness and unknown attributes.

use super::*;

use admin_schema::{
    AdminSchemaError, AttributeValue, Operation, Severity, ValidationConfig, ValidationContext,
    ValidationError,
};
use serde_json::json;

#[test]
fn test_missing_required_attribute() {
    let user = UserBuilder::new().without_primary_email().build_json();

    let diagnostics = validate("user", user, Operation::Create);
    assert_eq!(
        summaries(&diagnostics),
        vec![("primary_email".to_string(), "Missing required argument".to_string())]
    );
}

#[test]
fn test_null_required_attribute() {
    let user = UserBuilder::new()
        .with_attribute("primary_email", serde_json::Value::Null)
        .build_json();

    let diagnostics = validate("user", user, Operation::Update);
    assert_diagnostic!(diagnostics, "primary_email", "Missing required argument");
}

#[test]
fn test_missing_required_is_fine_on_read() {
    let user = UserBuilder::new().without_primary_email().build_json();
    assert!(validate("user", user, Operation::Read).is_empty());
}

#[test]
fn test_read_only_attribute_in_configuration() {
    let user = UserBuilder::new().with_id("118234567890").build_json();

    let diagnostics = validate("user", user.clone(), Operation::Create);
    assert_eq!(paths(&diagnostics), vec!["id"]);
    assert_eq!(
        diagnostics.as_slice()[0].summary(),
        "Invalid configuration for read-only attribute"
    );

    assert!(validate("user", user, Operation::Read).is_empty());
}

#[test]
fn test_read_only_nested_attribute() {
    let user = UserBuilder::new()
        .with_attribute(
            "name",
            json!({"family_name": "Doe", "given_name": "Jane", "full_name": "Jane Doe"}),
        )
        .build_json();

    let diagnostics = validate("user", user, Operation::Update);
    assert_eq!(paths(&diagnostics), vec!["name.full_name"]);
}

#[test]
fn test_incorrect_value_kind() {
    let user = UserBuilder::new()
        .with_attribute("suspended", json!("yes"))
        .with_attribute("aliases", json!("babs@example.com"))
        .build_json();

    let diagnostics = validate("user", user, Operation::Create);
    assert_eq!(
        summaries(&diagnostics),
        vec![
            ("suspended".to_string(), "Incorrect attribute value type".to_string()),
            ("aliases".to_string(), "Incorrect attribute value type".to_string()),
        ]
    );
    assert_eq!(
        diagnostics.as_slice()[0].detail(),
        "Attribute suspended must be of type bool, got string"
    );
    assert_eq!(
        diagnostics.as_slice()[1].detail(),
        "Attribute aliases must be of type list of string, got string"
    );
}

#[test]
fn test_rules_skipped_after_kind_mismatch() {
    let user = UserBuilder::new()
        .with_attribute("password", json!(1234))
        .build_json();

    let diagnostics = validate("user", user, Operation::Create);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics.as_slice()[0].summary(),
        "Incorrect attribute value type"
    );
}

#[test]
fn test_numbers() {
    let schema = json!({
        "schema_name": "employment",
        "fields": [{
            "field_name": "grade",
            "field_type": "INTEGER",
            "numeric_indexing_spec": [{"min_value": 1, "max_value": "ten"}]
        }]
    });

    let diagnostics = validate("schema", schema, Operation::Create);
    assert_eq!(
        paths(&diagnostics),
        vec!["fields[0].numeric_indexing_spec[0].max_value"]
    );

    let user = UserBuilder::new()
        .with_attribute("posix_accounts", json!([{"uid": 1.5}]))
        .build_json();
    let diagnostics = validate("user", user, Operation::Create);
    assert_eq!(
        diagnostics.as_slice()[0].detail(),
        "Attribute posix_accounts[0].uid must be of type number, got float"
    );
}

#[test]
fn test_duplicate_set_element() {
    let role = json!({
        "name": "Tour Desk",
        "privileges": [
            {"privilege_name": "USERS_RETRIEVE", "service_id": "00haapch16h1ysv"},
            {"privilege_name": "USERS_UPDATE", "service_id": "00haapch16h1ysv"},
            {"privilege_name": "USERS_RETRIEVE", "service_id": "00haapch16h1ysv"}
        ]
    });

    let diagnostics = validate("role", role, Operation::Create);
    assert_eq!(
        summaries(&diagnostics),
        vec![("privileges[2]".to_string(), "Duplicate set element".to_string())]
    );
}

#[test]
fn test_unknown_attribute() {
    let user = UserBuilder::new()
        .with_attribute("display_name", json!("Babs"))
        .build_json();

    let diagnostics = validate("user", user.clone(), Operation::Create);
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics.as_slice()[0];
    assert_eq!(diagnostic.severity(), Severity::Error);
    assert_eq!(diagnostic.summary(), "Unsupported argument");
    assert_eq!(
        diagnostic.detail(),
        "An argument named \"display_name\" is not expected at the top level."
    );

    let lenient = crate::common::registry_with(
        ValidationConfig::default().with_reject_unknown_attributes(false),
    );
    let diagnostics = lenient
        .validate_resource(&AttributeValue::from(user), &ValidationContext::create("user"))
        .unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert!(!diagnostics.has_errors());
    assert_eq!(diagnostics.warnings().count(), 1);
}

#[test]
fn test_unknown_nested_attribute() {
    let user = UserBuilder::new()
        .with_attribute("name", json!({"family_name": "Doe", "given_name": "Jane", "middle_name": "Q"}))
        .build_json();

    let diagnostics = validate("user", user, Operation::Create);
    assert_eq!(paths(&diagnostics), vec!["name.middle_name"]);
    assert_detail_contains!(diagnostics.as_slice()[0], "is not expected at name.");
}

#[test]
fn test_resource_must_be_a_record() {
    let diagnostics = validate("group", json!(["eng@example.com"]), Operation::Create);
    assert_eq!(
        diagnostics.as_slice()[0].detail(),
        "Attribute <root> must be of type object, got list"
    );
}

#[test]
fn test_unknown_resource_type() {
    let result = registry().validate_resource(
        &AttributeValue::from(json!({})),
        &ValidationContext::create("customer"),
    );
    assert_eq!(
        result.unwrap_err(),
        ValidationError::UnknownResourceType {
            type_name: "customer".to_string()
        }
    );

    let error = AdminSchemaError::from(ValidationError::unknown_resource_type("customer"));
    assert!(error.to_string().contains("customer"));
}
