//! Built-in resource type tests.
//!
//! Every sample configuration validates cleanly, and each resource's own
//! rules fire where expected.

use super::*;

use admin_schema::schema::resources::role::{RoleModel, RolePrivilege};
use admin_schema::schema::resources::user::{HASH_FUNCTIONS, UserModel, UserName};
use admin_schema::{Operation, Presence, SchemaRegistry};
use serde_json::json;

#[test]
fn test_samples_are_valid() {
    for (type_name, sample) in samples::all() {
        for operation in [Operation::Create, Operation::Update, Operation::Read] {
            let diagnostics = validate(type_name, sample.clone(), operation);
            assert!(
                diagnostics.is_empty(),
                "{type_name} sample on {operation}: {diagnostics:#?}"
            );
        }
    }
}

#[test]
fn test_every_schema_declares_a_required_attribute() {
    let registry = registry();
    for schema in registry.schemas() {
        assert!(
            schema
                .root
                .attributes
                .iter()
                .any(|attr| attr.presence == Presence::Required),
            "{} has no required attribute",
            schema.type_name
        );
    }
}

#[test]
fn test_user_hash_function() {
    for hash_function in HASH_FUNCTIONS {
        let user = UserBuilder::new().with_hash_function(hash_function).build_json();
        assert!(validate("user", user, Operation::Create).is_empty());
    }

    let user = UserBuilder::new().with_hash_function("SHA-256").build_json();
    let diagnostics = validate("user", user, Operation::Create);
    assert_eq!(paths(&diagnostics), vec!["hash_function"]);
    assert_detail_contains!(diagnostics.as_slice()[0], "MD5, SHA-1, crypt");
}

#[test]
fn test_user_name_lengths() {
    let user = UserBuilder::new().with_given_name("").build_json();
    let diagnostics = validate("user", user, Operation::Create);
    assert_eq!(paths(&diagnostics), vec!["name.given_name"]);

    let user = UserBuilder::new().with_given_name(&"x".repeat(61)).build_json();
    let diagnostics = validate("user", user, Operation::Create);
    assert_detail_contains!(diagnostics.as_slice()[0], "at most 60 characters long, got 61");
}

#[test]
fn test_user_missing_name_block() {
    let user = UserBuilder::new().without_attribute("name").build_json();
    let diagnostics = validate("user", user, Operation::Create);
    assert_eq!(
        summaries(&diagnostics),
        vec![("name".to_string(), "Missing required argument".to_string())]
    );
}

#[test]
fn test_user_collection_entries() {
    let mut user = samples::user();
    user["phones"][1]["type"] = json!("cell");
    user["ims"][0]["protocol"] = json!("irc");
    user["ssh_public_keys"] = json!([{"fingerprint": "SHA256:abc"}]);

    let diagnostics = validate("user", user, Operation::Create);
    assert_eq!(
        summaries(&diagnostics),
        vec![
            ("phones[1].type".to_string(), "Invalid Attribute Value Match".to_string()),
            (
                "ssh_public_keys[0].fingerprint".to_string(),
                "Invalid configuration for read-only attribute".to_string()
            ),
            ("ssh_public_keys[0].key".to_string(), "Missing required argument".to_string()),
            ("ims[0].protocol".to_string(), "Invalid Attribute Value Match".to_string()),
        ]
    );
}

#[test]
fn test_group_description_length() {
    let mut group = samples::group();
    group["description"] = json!("d".repeat(4097));

    let diagnostics = validate("group", group, Operation::Update);
    assert_eq!(paths(&diagnostics), vec!["description"]);
}

#[test]
fn test_group_settings_footer_and_moderation() {
    let mut settings = samples::group_settings();
    settings["custom_footer_text"] = json!("f".repeat(1001));
    settings["who_can_moderate_content"] = json!("MANAGERS_ONLY");
    settings["who_can_assist_content"] = json!("MANAGERS_ONLY");

    let diagnostics = validate("group_settings", settings, Operation::Update);
    assert_eq!(
        paths(&diagnostics),
        vec!["custom_footer_text", "who_can_moderate_content"]
    );
}

#[test]
fn test_role_assignment_scope() {
    let mut assignment = samples::role_assignment();
    assignment["scope_type"] = json!("DOMAIN");

    let diagnostics = validate("role_assignment", assignment, Operation::Create);
    assert_eq!(paths(&diagnostics), vec!["scope_type"]);
}

#[test]
fn test_custom_schema_field_type() {
    let mut schema = samples::custom_schema();
    schema["fields"][0]["field_type"] = json!("TEXT");
    schema["fields"][1]["field_id"] = json!("f-123");

    let diagnostics = validate("schema", schema, Operation::Create);
    assert_eq!(
        paths(&diagnostics),
        vec!["fields[0].field_type", "fields[1].field_id"]
    );
}

#[test]
fn test_domain_alias_requires_both_names() {
    let diagnostics = validate(
        "domain_alias",
        json!({"domain_alias_name": "example.org", "verified": true}),
        Operation::Create,
    );
    assert_eq!(
        summaries(&diagnostics),
        vec![
            ("parent_domain_name".to_string(), "Missing required argument".to_string()),
            ("verified".to_string(), "Invalid configuration for read-only attribute".to_string()),
        ]
    );
}

#[test]
fn test_typed_models() {
    let registry = SchemaRegistry::new().unwrap();

    let user = UserModel {
        primary_email: "jdoe@example.com".to_string(),
        password: Some("correct horse".to_string()),
        hash_function: Some("crypt".to_string()),
        name: UserName {
            family_name: "Doe".to_string(),
            given_name: "Jane".to_string(),
            full_name: None,
        },
        ..Default::default()
    };
    assert!(registry.validate_model(&user, Operation::Create).unwrap().is_empty());

    let role = RoleModel {
        name: "Tour Desk".to_string(),
        privileges: vec![RolePrivilege {
            privilege_name: "USERS_RETRIEVE".to_string(),
            service_id: "00haapch16h1ysv".to_string(),
        }],
        ..Default::default()
    };
    assert!(registry.validate_model(&role, Operation::Create).unwrap().is_empty());

    let empty_role = RoleModel::default();
    let diagnostics = registry.validate_model(&empty_role, Operation::Create).unwrap();
    assert!(diagnostics.is_empty(), "empty strings and lists are still set values");
}

#[test]
fn test_model_round_trips_through_json() {
    let user: UserModel = serde_json::from_value(samples::user()).unwrap();
    assert_eq!(user.emails.len(), 2);
    assert_eq!(user.emails[0].entry_type, "work");
    assert_eq!(user.posix_accounts[0].uid, Some(1001));
    assert_eq!(
        user.custom_schemas[0].schema_values.get("badge").map(String::as_str),
        Some("\"1234\"")
    );
}
