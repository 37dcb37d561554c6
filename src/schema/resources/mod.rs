//! Built-in administrative resource schemas.
//!
//! Each submodule declares one resource type: a [`ResourceSchema`] describing
//! every attribute and the typed model struct that configuration values and
//! API responses are mapped into. Declarations are fallible because building
//! a rule can fail; the registry builder surfaces such failures at startup.

pub mod domain;
pub mod domain_alias;
pub mod group;
pub mod group_member;
pub mod group_settings;
pub mod org_unit;
pub mod role;
pub mod role_assignment;
pub mod schema;
pub mod user;

use super::types::{AttributeDefinition, ResourceSchema};
use crate::error::{AdminSchemaResult, SchemaResult};
use crate::validators::Validator;
use crate::value::AttributeValue;
use serde::Serialize;

/// A typed resource model that can be validated against its schema.
pub trait ResourceModel: Serialize {
    /// Resource type the model belongs to.
    const TYPE_NAME: &'static str;

    /// Map the model into an attribute value for validation.
    fn to_attribute_value(&self) -> AdminSchemaResult<AttributeValue> {
        Ok(AttributeValue::from(serde_json::to_value(self)?))
    }
}

/// Declarations of every built-in resource, in registration order.
pub fn builtin_schemas() -> Vec<SchemaResult<ResourceSchema>> {
    vec![
        user::user_schema(),
        group::group_schema(),
        group_member::group_member_schema(),
        group_settings::group_settings_schema(),
        org_unit::org_unit_schema(),
        role::role_schema(),
        role_assignment::role_assignment_schema(),
        domain::domain_schema(),
        domain_alias::domain_alias_schema(),
        schema::schema_schema(),
    ]
}

/// Required `type` attribute restricted to `options`.
pub(crate) fn type_attribute(options: &[&str]) -> SchemaResult<AttributeDefinition> {
    Ok(AttributeDefinition::string("type")
        .required()
        .describe("The type of the entry.")
        .with_validator(Validator::one_of(options.iter().copied())?))
}

/// Free-form `custom_type`, used when `type` is `custom`.
pub(crate) fn custom_type_attribute() -> AttributeDefinition {
    AttributeDefinition::string("custom_type")
        .describe("If the entry type is custom, the custom label for it.")
}

/// Whether an entry is the primary one of its collection.
pub(crate) fn primary_attribute() -> AttributeDefinition {
    AttributeDefinition::bool("primary")
        .optional_computed()
        .describe("Whether this is the primary entry.")
}

/// Server-computed entity tag.
pub(crate) fn etag_attribute() -> AttributeDefinition {
    AttributeDefinition::string("etag")
        .computed()
        .describe("ETag of the resource.")
}
