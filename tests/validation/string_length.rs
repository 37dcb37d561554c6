//! String length rule tests.
//!
//! Covers the inclusive bounds, how length is counted, and what the rule does
//! with values that are not strings.

use super::*;

use admin_schema::{AttributePath, AttributeValue, SchemaError, Severity, Validator};

fn check(min: usize, max: usize, value: AttributeValue) -> Vec<admin_schema::Diagnostic> {
    Validator::string_length(min, max)
        .expect("valid bounds")
        .validate(&context(), &AttributePath::attribute("name"), &value)
}

#[test]
fn test_empty_string_below_minimum() {
    let diagnostics = check(1, 5, AttributeValue::string(""));

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.severity(), Severity::Error);
    assert_eq!(diagnostic.summary(), "Invalid Attribute Value Length");
    assert_eq!(diagnostic.path().to_string(), "name");
    assert_eq!(
        diagnostic.detail(),
        "Attribute name must be at least 1 characters long, got 0: \"\""
    );
}

#[test]
fn test_above_maximum() {
    let diagnostics = check(1, 5, AttributeValue::string("Barbara"));

    assert_eq!(diagnostics.len(), 1);
    assert_detail_contains!(diagnostics[0], "must be at most 5 characters long, got 7");
    assert_detail_contains!(diagnostics[0], "\"Barbara\"");
}

#[test]
fn test_bounds_are_inclusive() {
    assert!(check(1, 5, AttributeValue::string("a")).is_empty());
    assert!(check(1, 5, AttributeValue::string("abcde")).is_empty());
    assert!(check(0, 0, AttributeValue::string("")).is_empty());
    assert!(check(3, 3, AttributeValue::string("abc")).is_empty());
}

#[test]
fn test_length_counts_characters() {
    // Five characters, nine bytes.
    assert!(check(1, 5, AttributeValue::string("Zo\u{eb} \u{1f389}")).is_empty());
    assert_eq!(check(1, 4, AttributeValue::string("Zo\u{eb} \u{1f389}")).len(), 1);
}

#[test]
fn test_null_is_skipped() {
    assert!(check(1, 5, AttributeValue::Null).is_empty());
}

#[test]
fn test_non_string_value() {
    let diagnostics = check(1, 5, AttributeValue::Int(42));

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].summary(), "Incorrect attribute value type");
    assert_eq!(
        diagnostics[0].detail(),
        "Attribute name must be of type string, got number"
    );
}

#[test]
fn test_inverted_bounds_rejected() {
    assert_eq!(
        Validator::string_length(5, 1).unwrap_err(),
        SchemaError::InvalidLengthBounds { min: 5, max: 1 }
    );
}

#[test]
fn test_descriptions() {
    let rule = Validator::string_length(8, 100).unwrap();
    assert_eq!(rule.description(), "string length must be between 8 and 100");
    assert_eq!(
        rule.markdown_description(),
        "string length must be between `8` and `100`"
    );
}

#[test]
fn test_password_through_registry() {
    let diagnostics = registry()
        .validate_resource(
            &UserBuilder::new().with_password("hunter2").build(),
            &admin_schema::ValidationContext::create("user"),
        )
        .unwrap();

    assert_eq!(paths(&diagnostics), vec!["password"]);
    assert_detail_contains!(diagnostics.as_slice()[0], "at least 8 characters long, got 7");
}

#[test]
fn test_password_is_not_echoed() {
    let user = UserBuilder::new().with_password("s3cr3t").build_json();
    let diagnostics = validate("user", user, admin_schema::Operation::Create);

    assert_eq!(paths(&diagnostics), vec!["password"]);
    let detail = diagnostics.as_slice()[0].detail();
    assert!(!detail.contains("s3cr3t"), "password leaked: {detail}");
    assert_eq!(
        detail,
        "Attribute password must be at least 8 characters long, got 6: (sensitive value)"
    );
}
