//! The `domain` resource: a domain registered to the customer account.

use super::{ResourceModel, etag_attribute};
use crate::error::SchemaResult;
use crate::schema::types::{AttributeDefinition, ObjectDefinition, ResourceSchema};

use serde::{Deserialize, Serialize};

pub const TYPE_NAME: &str = "domain";

pub fn domain_schema() -> SchemaResult<ResourceSchema> {
    let root = ObjectDefinition::new(vec![
        AttributeDefinition::string("id")
            .computed()
            .describe("The ID of this resource."),
        AttributeDefinition::string("domain_name")
            .required()
            .describe("The domain name of the customer."),
        AttributeDefinition::string_list("domain_aliases")
            .computed()
            .describe("List of domain alias names."),
        AttributeDefinition::bool("verified")
            .computed()
            .describe("Indicates the verification state of a domain."),
        AttributeDefinition::bool("is_primary")
            .computed()
            .describe("Indicates if the domain is a primary domain."),
        AttributeDefinition::int64("creation_time")
            .computed()
            .describe("Creation time of the domain, in milliseconds since epoch."),
        etag_attribute(),
    ]);

    Ok(ResourceSchema::new(TYPE_NAME, "Customer domain.", root))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainModel {
    pub id: Option<String>,
    pub domain_name: String,
    pub domain_aliases: Option<Vec<String>>,
    pub verified: Option<bool>,
    pub is_primary: Option<bool>,
    pub creation_time: Option<i64>,
    pub etag: Option<String>,
}

impl ResourceModel for DomainModel {
    const TYPE_NAME: &'static str = TYPE_NAME;
}
