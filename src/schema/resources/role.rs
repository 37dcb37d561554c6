//! The `role` resource: a custom administrator role and its privileges.

use super::{ResourceModel, etag_attribute};
use crate::error::SchemaResult;
use crate::schema::types::{AttributeDefinition, ObjectDefinition, ResourceSchema};

use serde::{Deserialize, Serialize};

pub const TYPE_NAME: &str = "role";

pub fn role_schema() -> SchemaResult<ResourceSchema> {
    let privileges = ObjectDefinition::new(vec![
        AttributeDefinition::string("privilege_name")
            .required()
            .describe("The name of the privilege."),
        AttributeDefinition::string("service_id")
            .required()
            .describe("The obfuscated ID of the service this privilege is for."),
    ]);

    let root = ObjectDefinition::new(vec![
        AttributeDefinition::string("id")
            .computed()
            .describe("ID of the role."),
        AttributeDefinition::string("name")
            .required()
            .describe("Name of the role."),
        AttributeDefinition::string("description")
            .describe("A short description of the role."),
        AttributeDefinition::object_set("privileges", privileges)
            .required()
            .describe("The set of privileges that are granted to this role."),
        AttributeDefinition::bool("is_system_role")
            .computed()
            .describe("Returns true if this is a pre-defined system role."),
        AttributeDefinition::bool("is_super_admin_role")
            .computed()
            .describe("Returns true if the role is a super admin role."),
        etag_attribute(),
    ]);

    Ok(ResourceSchema::new(TYPE_NAME, "Custom administrator role.", root))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleModel {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub privileges: Vec<RolePrivilege>,
    pub is_system_role: Option<bool>,
    pub is_super_admin_role: Option<bool>,
    pub etag: Option<String>,
}

impl ResourceModel for RoleModel {
    const TYPE_NAME: &'static str = TYPE_NAME;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePrivilege {
    pub privilege_name: String,
    pub service_id: String,
}
