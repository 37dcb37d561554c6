//! Test fixtures: realistic configurations for every built-in resource type.
//!
//! Every sample is valid for a create operation. Tests derive invalid
//! variants by editing a sample rather than writing one from scratch.

/// Valid sample configurations, one per resource type
pub mod samples {
    use serde_json::{Value, json};

    pub fn user() -> Value {
        json!({
            "primary_email": "bjensen@example.com",
            "password": "7d5a2b0c1e9f4a36",
            "hash_function": "SHA-1",
            "change_password_at_next_login": true,
            "name": {
                "family_name": "Jensen",
                "given_name": "Barbara"
            },
            "emails": [
                {"address": "bjensen@example.com", "type": "work", "primary": true},
                {"address": "babs@jensen.org", "type": "home"}
            ],
            "phones": [
                {"value": "555-555-5555", "type": "work"},
                {"value": "555-555-4444", "type": "mobile"}
            ],
            "addresses": [
                {
                    "type": "work",
                    "street_address": "100 Universal City Plaza",
                    "locality": "Hollywood",
                    "region": "CA",
                    "postal_code": "91608",
                    "country_code": "US",
                    "primary": true
                }
            ],
            "organizations": [
                {"name": "Universal Studios", "department": "Tour Operations", "type": "work"}
            ],
            "external_ids": [{"type": "organization", "value": "701984"}],
            "relations": [{"type": "manager", "value": "mjohnson@example.com"}],
            "languages": [{"language_code": "en-US", "preference": "preferred"}],
            "ims": [{"protocol": "gtalk", "im": "babs@example.com", "type": "work"}],
            "posix_accounts": [
                {"username": "bjensen", "uid": 1001, "gid": 1001, "operating_system_type": "linux"}
            ],
            "ssh_public_keys": [{"key": "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIB example"}],
            "websites": [{"type": "blog", "value": "https://babs.example.com"}],
            "locations": [{"type": "desk", "building_id": "HQ", "desk_code": "4B-12"}],
            "keywords": [{"type": "occupation", "value": "tour guide"}],
            "custom_schemas": [
                {"schema_name": "employment", "schema_values": {"badge": "\"1234\""}}
            ],
            "aliases": ["babs@example.com"],
            "recovery_email": "babs@jensen.org",
            "org_unit_path": "/tours"
        })
    }

    pub fn group() -> Value {
        json!({
            "email": "tours@example.com",
            "name": "Tour Operations",
            "description": "Everyone running studio tours",
            "aliases": ["tour-ops@example.com"]
        })
    }

    pub fn group_member() -> Value {
        json!({
            "group_id": "tours@example.com",
            "email": "bjensen@example.com",
            "role": "OWNER",
            "delivery_settings": "DIGEST"
        })
    }

    pub fn group_settings() -> Value {
        json!({
            "email": "tours@example.com",
            "who_can_join": "INVITED_CAN_JOIN",
            "who_can_view_membership": "ALL_MEMBERS_CAN_VIEW",
            "who_can_post_message": "ALL_IN_DOMAIN_CAN_POST",
            "allow_external_members": false,
            "message_moderation_level": "MODERATE_NON_MEMBERS",
            "spam_moderation_level": "MODERATE",
            "reply_to": "REPLY_TO_CUSTOM",
            "custom_reply_to": "tour-desk@example.com",
            "custom_footer_text": "Sent via the tours group",
            "who_can_moderate_members": "OWNERS_AND_MANAGERS",
            "who_can_discover_group": "ALL_IN_DOMAIN_CAN_DISCOVER"
        })
    }

    pub fn org_unit() -> Value {
        json!({
            "name": "tours",
            "description": "Tour operations staff",
            "parent_org_unit_path": "/"
        })
    }

    pub fn role() -> Value {
        json!({
            "name": "Tour Desk",
            "description": "Manage tour guide accounts",
            "privileges": [
                {"privilege_name": "USERS_RETRIEVE", "service_id": "00haapch16h1ysv"},
                {"privilege_name": "USERS_UPDATE", "service_id": "00haapch16h1ysv"}
            ]
        })
    }

    pub fn role_assignment() -> Value {
        json!({
            "role_id": "91447453409035734",
            "assigned_to": "103493440529405622101",
            "scope_type": "ORG_UNIT",
            "org_unit_id": "03ph8a2z1s3ovsg"
        })
    }

    pub fn domain() -> Value {
        json!({"domain_name": "example.com"})
    }

    pub fn domain_alias() -> Value {
        json!({
            "parent_domain_name": "example.com",
            "domain_alias_name": "example.org"
        })
    }

    pub fn custom_schema() -> Value {
        json!({
            "schema_name": "employment",
            "display_name": "Employment",
            "fields": [
                {"field_name": "badge", "field_type": "STRING", "read_access_type": "ADMINS_AND_SELF"},
                {
                    "field_name": "grade",
                    "field_type": "INTEGER",
                    "indexed": true,
                    "numeric_indexing_spec": [{"min_value": 1, "max_value": 12.5}]
                }
            ]
        })
    }

    /// Every sample paired with its resource type.
    pub fn all() -> Vec<(&'static str, Value)> {
        vec![
            ("user", user()),
            ("group", group()),
            ("group_member", group_member()),
            ("group_settings", group_settings()),
            ("org_unit", org_unit()),
            ("role", role()),
            ("role_assignment", role_assignment()),
            ("domain", domain()),
            ("domain_alias", domain_alias()),
            ("schema", custom_schema()),
        ]
    }
}
