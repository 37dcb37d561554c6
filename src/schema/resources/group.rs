//! The `group` resource: a mailing or access group.

use super::{ResourceModel, etag_attribute};
use crate::error::SchemaResult;
use crate::schema::types::{AttributeDefinition, ObjectDefinition, ResourceSchema};
use crate::validators::Validator;

use serde::{Deserialize, Serialize};

pub const TYPE_NAME: &str = "group";

pub fn group_schema() -> SchemaResult<ResourceSchema> {
    let root = ObjectDefinition::new(vec![
        AttributeDefinition::string("id")
            .computed()
            .describe("The unique ID of a group."),
        AttributeDefinition::string("email")
            .required()
            .describe("The group's email address."),
        AttributeDefinition::string("name")
            .optional_computed()
            .describe("The group's display name.")
            .with_validator(Validator::string_length(0, 75)?),
        AttributeDefinition::string("description")
            .describe("An extended description to help users determine the purpose of a group.")
            .with_validator(Validator::string_length(0, 4096)?),
        AttributeDefinition::bool("admin_created")
            .computed()
            .describe("Value is true if this group was created by an administrator."),
        AttributeDefinition::int64("direct_members_count")
            .computed()
            .describe("The number of users that are direct members of the group."),
        AttributeDefinition::string_list("aliases")
            .describe("The list of the group's alias email addresses."),
        AttributeDefinition::string_list("non_editable_aliases")
            .computed()
            .describe("List of the group's non-editable alias email addresses."),
        etag_attribute(),
    ]);

    Ok(ResourceSchema::new(TYPE_NAME, "Directory group.", root))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupModel {
    pub id: Option<String>,
    pub email: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub admin_created: Option<bool>,
    pub direct_members_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub non_editable_aliases: Option<Vec<String>>,
    pub etag: Option<String>,
}

impl ResourceModel for GroupModel {
    const TYPE_NAME: &'static str = TYPE_NAME;
}
