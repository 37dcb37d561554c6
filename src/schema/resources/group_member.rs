//! The `group_member` resource: one membership of a user or group in a group.
//!
//! A member is addressed either by email or by its unique ID, never both.

use super::{ResourceModel, etag_attribute};
use crate::error::SchemaResult;
use crate::schema::types::{AttributeDefinition, ObjectDefinition, ResourceSchema};
use crate::validators::Validator;

use serde::{Deserialize, Serialize};

pub const TYPE_NAME: &str = "group_member";

pub const ROLES: [&str; 3] = ["MANAGER", "MEMBER", "OWNER"];
pub const DELIVERY_SETTINGS: [&str; 5] = ["ALL_MAIL", "DAILY", "DIGEST", "DISABLED", "NONE"];

pub fn group_member_schema() -> SchemaResult<ResourceSchema> {
    let root = ObjectDefinition::new(vec![
        AttributeDefinition::string("id")
            .computed()
            .describe("The unique identifier of the membership."),
        AttributeDefinition::string("group_id")
            .required()
            .describe("Identifies the group in the API request."),
        AttributeDefinition::string("email")
            .optional_computed()
            .describe("The member's email address."),
        AttributeDefinition::string("member_id")
            .optional_computed()
            .describe("The unique ID of the group member."),
        AttributeDefinition::string("role")
            .optional_computed()
            .describe("The member's role in a group.")
            .with_validator(Validator::one_of(ROLES)?),
        AttributeDefinition::string("type")
            .computed()
            .describe("The type of group member: USER, GROUP or CUSTOMER."),
        AttributeDefinition::string("status")
            .computed()
            .describe("Status of member."),
        AttributeDefinition::string("delivery_settings")
            .optional_computed()
            .describe("Defines mail delivery preferences of member.")
            .with_validator(Validator::one_of(DELIVERY_SETTINGS)?),
        etag_attribute(),
    ])
    .with_validator(Validator::exactly_one_of(["email", "member_id"])?);

    Ok(ResourceSchema::new(TYPE_NAME, "Group membership.", root))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupMemberModel {
    pub id: Option<String>,
    pub group_id: String,
    pub email: Option<String>,
    pub member_id: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "type")]
    pub member_type: Option<String>,
    pub status: Option<String>,
    pub delivery_settings: Option<String>,
    pub etag: Option<String>,
}

impl ResourceModel for GroupMemberModel {
    const TYPE_NAME: &'static str = TYPE_NAME;
}
