//! The `group_settings` resource: access and moderation settings of a group.
//!
//! Every setting is optional; the remote service reports its default for any
//! setting left unconfigured.

use super::{ResourceModel, etag_attribute};
use crate::error::SchemaResult;
use crate::schema::types::{AttributeDefinition, ObjectDefinition, ResourceSchema};
use crate::validators::Validator;

use serde::{Deserialize, Serialize};

pub const TYPE_NAME: &str = "group_settings";

const MODERATORS: [&str; 4] = ["ALL_MEMBERS", "OWNERS_AND_MANAGERS", "OWNERS_ONLY", "NONE"];

fn setting(name: &str, description: &str, options: &[&str]) -> SchemaResult<AttributeDefinition> {
    Ok(AttributeDefinition::string(name)
        .optional_computed()
        .describe(description)
        .with_validator(Validator::one_of(options.iter().copied())?))
}

fn flag(name: &str, description: &str) -> AttributeDefinition {
    AttributeDefinition::bool(name)
        .optional_computed()
        .describe(description)
}

pub fn group_settings_schema() -> SchemaResult<ResourceSchema> {
    let root = ObjectDefinition::new(vec![
        AttributeDefinition::string("email")
            .required()
            .describe("The group's email address."),
        AttributeDefinition::string("name")
            .computed()
            .describe("Name of the group."),
        AttributeDefinition::string("description")
            .computed()
            .describe("Description of the group."),
        setting(
            "who_can_join",
            "Permission to join group.",
            &[
                "ANYONE_CAN_JOIN",
                "ALL_IN_DOMAIN_CAN_JOIN",
                "INVITED_CAN_JOIN",
                "CAN_REQUEST_TO_JOIN",
            ],
        )?,
        setting(
            "who_can_view_membership",
            "Permissions to view membership.",
            &[
                "ALL_IN_DOMAIN_CAN_VIEW",
                "ALL_MEMBERS_CAN_VIEW",
                "ALL_MANAGERS_CAN_VIEW",
                "ALL_OWNERS_CAN_VIEW",
            ],
        )?,
        setting(
            "who_can_view_group",
            "Permissions to view group messages.",
            &[
                "ANYONE_CAN_VIEW",
                "ALL_IN_DOMAIN_CAN_VIEW",
                "ALL_MEMBERS_CAN_VIEW",
                "ALL_MANAGERS_CAN_VIEW",
                "ALL_OWNERS_CAN_VIEW",
            ],
        )?,
        flag(
            "allow_external_members",
            "Identifies whether members external to your organization can join the group.",
        ),
        setting(
            "who_can_post_message",
            "Permissions to post messages.",
            &[
                "NONE_CAN_POST",
                "ALL_MANAGERS_CAN_POST",
                "ALL_MEMBERS_CAN_POST",
                "ALL_OWNERS_CAN_POST",
                "ALL_IN_DOMAIN_CAN_POST",
                "ANYONE_CAN_POST",
            ],
        )?,
        flag("allow_web_posting", "Allows posting from web."),
        AttributeDefinition::string("primary_language")
            .describe("The primary language for group."),
        flag("is_archived", "Allows the Group contents to be archived."),
        flag("archive_only", "Allows the group to be archived only."),
        setting(
            "message_moderation_level",
            "Moderation level of incoming messages.",
            &[
                "MODERATE_ALL_MESSAGES",
                "MODERATE_NON_MEMBERS",
                "MODERATE_NEW_MEMBERS",
                "MODERATE_NONE",
            ],
        )?,
        setting(
            "spam_moderation_level",
            "Specifies moderation levels for messages detected as spam.",
            &["ALLOW", "MODERATE", "SILENTLY_MODERATE", "REJECT"],
        )?,
        setting(
            "reply_to",
            "Specifies who receives the default reply.",
            &[
                "REPLY_TO_CUSTOM",
                "REPLY_TO_SENDER",
                "REPLY_TO_LIST",
                "REPLY_TO_OWNER",
                "REPLY_TO_IGNORE",
                "REPLY_TO_MANAGERS",
            ],
        )?,
        AttributeDefinition::string("custom_reply_to")
            .describe("An email address used when replying to a message if reply_to is REPLY_TO_CUSTOM."),
        flag("include_custom_footer", "Whether to include custom footer."),
        AttributeDefinition::string("custom_footer_text")
            .describe("Set the content of custom footer text.")
            .with_validator(Validator::string_length(0, 1000)?),
        flag(
            "send_message_deny_notification",
            "Allows a member to be notified if the member's message to the group is denied by the group owner.",
        ),
        AttributeDefinition::string("default_message_deny_notification_text")
            .describe("When a message is rejected, this is text for the rejection notification.")
            .with_validator(Validator::string_length(0, 10000)?),
        flag(
            "members_can_post_as_the_group",
            "Enables members to post messages as the group.",
        ),
        flag(
            "include_in_global_address_list",
            "Enables the group to be included in the Global Address List.",
        ),
        setting(
            "who_can_leave_group",
            "Permission to leave the group.",
            &[
                "ALL_MANAGERS_CAN_LEAVE",
                "ALL_OWNERS_CAN_LEAVE",
                "ALL_MEMBERS_CAN_LEAVE",
                "NONE_CAN_LEAVE",
            ],
        )?,
        setting(
            "who_can_contact_owner",
            "Permission to contact owner of the group via web UI.",
            &[
                "ALL_IN_DOMAIN_CAN_CONTACT",
                "ALL_MANAGERS_CAN_CONTACT",
                "ALL_MEMBERS_CAN_CONTACT",
                "ANYONE_CAN_CONTACT",
            ],
        )?,
        flag(
            "favorite_replies_on_top",
            "Indicates if favorite replies should be displayed above other replies.",
        ),
        setting(
            "who_can_moderate_members",
            "Specifies who can manage members.",
            &MODERATORS,
        )?,
        setting(
            "who_can_moderate_content",
            "Specifies who can moderate content.",
            &MODERATORS,
        )?,
        setting(
            "who_can_assist_content",
            "Specifies who can moderate metadata.",
            &[
                "ALL_MEMBERS",
                "OWNERS_AND_MANAGERS",
                "MANAGERS_ONLY",
                "OWNERS_ONLY",
                "NONE",
            ],
        )?,
        setting(
            "who_can_discover_group",
            "Specifies the set of users for whom this group is discoverable.",
            &[
                "ANYONE_CAN_DISCOVER",
                "ALL_IN_DOMAIN_CAN_DISCOVER",
                "ALL_MEMBERS_CAN_DISCOVER",
            ],
        )?,
        flag(
            "enable_collaborative_inbox",
            "Specifies whether a collaborative inbox will remain turned on for the group.",
        ),
        AttributeDefinition::bool("custom_roles_enabled_for_settings_to_be_merged")
            .computed()
            .describe("Specifies whether the group has a custom role that's included in one of the settings being merged."),
        etag_attribute(),
    ]);

    Ok(ResourceSchema::new(TYPE_NAME, "Settings of a directory group.", root))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSettingsModel {
    pub email: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub who_can_join: Option<String>,
    pub who_can_view_membership: Option<String>,
    pub who_can_view_group: Option<String>,
    pub allow_external_members: Option<bool>,
    pub who_can_post_message: Option<String>,
    pub allow_web_posting: Option<bool>,
    pub primary_language: Option<String>,
    pub is_archived: Option<bool>,
    pub archive_only: Option<bool>,
    pub message_moderation_level: Option<String>,
    pub spam_moderation_level: Option<String>,
    pub reply_to: Option<String>,
    pub custom_reply_to: Option<String>,
    pub include_custom_footer: Option<bool>,
    pub custom_footer_text: Option<String>,
    pub send_message_deny_notification: Option<bool>,
    pub default_message_deny_notification_text: Option<String>,
    pub members_can_post_as_the_group: Option<bool>,
    pub include_in_global_address_list: Option<bool>,
    pub who_can_leave_group: Option<String>,
    pub who_can_contact_owner: Option<String>,
    pub favorite_replies_on_top: Option<bool>,
    pub who_can_moderate_members: Option<String>,
    pub who_can_moderate_content: Option<String>,
    pub who_can_assist_content: Option<String>,
    pub who_can_discover_group: Option<String>,
    pub enable_collaborative_inbox: Option<bool>,
    pub custom_roles_enabled_for_settings_to_be_merged: Option<bool>,
    pub etag: Option<String>,
}

impl ResourceModel for GroupSettingsModel {
    const TYPE_NAME: &'static str = TYPE_NAME;
}
