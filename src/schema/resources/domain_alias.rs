//! The `domain_alias` resource: an alias of a registered domain.

use super::{ResourceModel, etag_attribute};
use crate::error::SchemaResult;
use crate::schema::types::{AttributeDefinition, ObjectDefinition, ResourceSchema};

use serde::{Deserialize, Serialize};

pub const TYPE_NAME: &str = "domain_alias";

pub fn domain_alias_schema() -> SchemaResult<ResourceSchema> {
    let root = ObjectDefinition::new(vec![
        AttributeDefinition::string("id")
            .computed()
            .describe("The ID of this resource."),
        AttributeDefinition::string("parent_domain_name")
            .required()
            .describe("The parent domain name that the domain alias is associated with."),
        AttributeDefinition::string("domain_alias_name")
            .required()
            .describe("The domain alias name."),
        AttributeDefinition::bool("verified")
            .computed()
            .describe("Indicates the verification state of a domain alias."),
        AttributeDefinition::int64("creation_time")
            .computed()
            .describe("Creation time of the domain alias, in milliseconds since epoch."),
        etag_attribute(),
    ]);

    Ok(ResourceSchema::new(TYPE_NAME, "Alias of a customer domain.", root))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainAliasModel {
    pub id: Option<String>,
    pub parent_domain_name: String,
    pub domain_alias_name: String,
    pub verified: Option<bool>,
    pub creation_time: Option<i64>,
    pub etag: Option<String>,
}

impl ResourceModel for DomainAliasModel {
    const TYPE_NAME: &'static str = TYPE_NAME;
}
