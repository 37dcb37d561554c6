//! The `role_assignment` resource: grants a role to a user or group.

use super::{ResourceModel, etag_attribute};
use crate::error::SchemaResult;
use crate::schema::types::{AttributeDefinition, ObjectDefinition, ResourceSchema};
use crate::validators::Validator;

use serde::{Deserialize, Serialize};

pub const TYPE_NAME: &str = "role_assignment";

pub const SCOPE_TYPES: [&str; 2] = ["CUSTOMER", "ORG_UNIT"];

pub fn role_assignment_schema() -> SchemaResult<ResourceSchema> {
    let root = ObjectDefinition::new(vec![
        AttributeDefinition::string("id")
            .computed()
            .describe("ID of this role assignment."),
        AttributeDefinition::string("role_id")
            .required()
            .describe("The ID of the role that is assigned."),
        AttributeDefinition::string("assigned_to")
            .required()
            .describe("The unique ID of the user or group this role is assigned to."),
        AttributeDefinition::string("scope_type")
            .describe("The scope in which this role is assigned.")
            .with_validator(Validator::one_of(SCOPE_TYPES)?),
        AttributeDefinition::string("org_unit_id")
            .describe("If the role is restricted to an organizational unit, this contains its ID."),
        AttributeDefinition::string("assignee_type")
            .computed()
            .describe("The type of the assignee: USER or GROUP."),
        etag_attribute(),
    ]);

    Ok(ResourceSchema::new(TYPE_NAME, "Administrator role assignment.", root))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignmentModel {
    pub id: Option<String>,
    pub role_id: String,
    pub assigned_to: String,
    pub scope_type: Option<String>,
    pub org_unit_id: Option<String>,
    pub assignee_type: Option<String>,
    pub etag: Option<String>,
}

impl ResourceModel for RoleAssignmentModel {
    const TYPE_NAME: &'static str = TYPE_NAME;
}
