//! The `schema` resource: a custom user schema adding fields to user profiles.

use super::{ResourceModel, etag_attribute};
use crate::error::SchemaResult;
use crate::schema::types::{AttributeDefinition, ObjectDefinition, ResourceSchema};
use crate::validators::Validator;

use serde::{Deserialize, Serialize};

pub const TYPE_NAME: &str = "schema";

pub const FIELD_TYPES: [&str; 7] = ["STRING", "INTEGER", "DOUBLE", "BOOL", "EMAIL", "PHONE", "DATE"];

pub fn schema_schema() -> SchemaResult<ResourceSchema> {
    let numeric_indexing_spec = ObjectDefinition::new(vec![
        AttributeDefinition::float64("max_value")
            .describe("Maximum value of this field."),
        AttributeDefinition::float64("min_value")
            .describe("Minimum value of this field."),
    ]);

    let fields = ObjectDefinition::new(vec![
        AttributeDefinition::string("field_name")
            .required()
            .describe("The name of the field."),
        AttributeDefinition::string("field_id")
            .computed()
            .describe("The unique identifier of the field."),
        AttributeDefinition::string("field_type")
            .required()
            .describe("The type of the field.")
            .with_validator(Validator::one_of(FIELD_TYPES)?),
        AttributeDefinition::string("display_name")
            .optional_computed()
            .describe("Display name of the field."),
        AttributeDefinition::bool("indexed")
            .optional_computed()
            .describe("Whether the field is indexed."),
        AttributeDefinition::bool("multi_valued")
            .describe("A boolean specifying whether this is a multi-valued field or not."),
        AttributeDefinition::string("read_access_type")
            .optional_computed()
            .describe("Specifies who can view values of this field.")
            .with_validator(Validator::one_of(["ADMINS_AND_SELF", "ALL_DOMAIN_USERS"])?),
        AttributeDefinition::object_list("numeric_indexing_spec", numeric_indexing_spec)
            .describe("Indexing spec for a numeric field."),
        etag_attribute(),
    ]);

    let root = ObjectDefinition::new(vec![
        AttributeDefinition::string("schema_id")
            .computed()
            .describe("The unique identifier of the schema."),
        AttributeDefinition::string("schema_name")
            .required()
            .describe("The schema's name."),
        AttributeDefinition::string("display_name")
            .optional_computed()
            .describe("Display name for the schema."),
        AttributeDefinition::object_list("fields", fields)
            .required()
            .describe("A list of fields in the schema."),
        etag_attribute(),
    ]);

    Ok(ResourceSchema::new(TYPE_NAME, "Custom user schema.", root))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaModel {
    pub schema_id: Option<String>,
    pub schema_name: String,
    pub display_name: Option<String>,
    pub fields: Vec<SchemaFieldModel>,
    pub etag: Option<String>,
}

impl ResourceModel for SchemaModel {
    const TYPE_NAME: &'static str = TYPE_NAME;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaFieldModel {
    pub field_name: String,
    pub field_id: Option<String>,
    pub field_type: String,
    pub display_name: Option<String>,
    pub indexed: Option<bool>,
    pub multi_valued: Option<bool>,
    pub read_access_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub numeric_indexing_spec: Vec<NumericIndexingSpec>,
    pub etag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericIndexingSpec {
    pub max_value: Option<f64>,
    pub min_value: Option<f64>,
}
