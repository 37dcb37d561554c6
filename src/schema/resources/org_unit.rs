//! The `org_unit` resource: a node in the organizational unit tree.

use super::{ResourceModel, etag_attribute};
use crate::error::SchemaResult;
use crate::schema::types::{AttributeDefinition, ObjectDefinition, ResourceSchema};

use serde::{Deserialize, Serialize};

pub const TYPE_NAME: &str = "org_unit";

pub fn org_unit_schema() -> SchemaResult<ResourceSchema> {
    let root = ObjectDefinition::new(vec![
        AttributeDefinition::string("org_unit_id")
            .computed()
            .describe("The unique ID of the organizational unit."),
        AttributeDefinition::string("name")
            .required()
            .describe("The organizational unit's path name."),
        AttributeDefinition::string("description")
            .describe("Description of the organizational unit."),
        AttributeDefinition::bool("block_inheritance")
            .describe("Determines if a sub-organizational unit can inherit the settings of the parent organization."),
        AttributeDefinition::string("parent_org_unit_id")
            .optional_computed()
            .describe("The unique ID of the parent organizational unit."),
        AttributeDefinition::string("parent_org_unit_path")
            .optional_computed()
            .describe("The organizational unit's parent path."),
        AttributeDefinition::string("org_unit_path")
            .computed()
            .describe("The full path to the organizational unit."),
        etag_attribute(),
    ]);

    Ok(ResourceSchema::new(TYPE_NAME, "Organizational unit.", root))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrgUnitModel {
    pub org_unit_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub block_inheritance: Option<bool>,
    pub parent_org_unit_id: Option<String>,
    pub parent_org_unit_path: Option<String>,
    pub org_unit_path: Option<String>,
    pub etag: Option<String>,
}

impl ResourceModel for OrgUnitModel {
    const TYPE_NAME: &'static str = TYPE_NAME;
}
