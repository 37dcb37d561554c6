//! Schema registry for the administrative resource types.
//!
//! The registry is built once during provider initialization and passed by
//! reference to whatever runs the resource lifecycle. Every schema is checked
//! for declaration defects when the registry is built, so a broken schema
//! fails at startup (and in tests) rather than against real configuration.

use super::builder::SchemaRegistryBuilder;
use super::types::{ObjectDefinition, ResourceSchema};
use crate::config::ValidationConfig;
use crate::error::{SchemaError, SchemaResult};
use crate::path::AttributePath;
use crate::validators::{Validator, ValidatorScope};

use std::collections::{BTreeMap, HashSet};

/// Registry of resource schemas with validation capabilities.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, ResourceSchema>,
    config: ValidationConfig,
}

impl SchemaRegistry {
    /// Create a registry holding every built-in resource schema with the
    /// default configuration.
    pub fn new() -> SchemaResult<Self> {
        Self::builder().with_builtin_resources().build()
    }

    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::new()
    }

    /// Assemble a registry from already-checked parts.
    pub(super) fn from_parts(
        schemas: BTreeMap<String, ResourceSchema>,
        config: ValidationConfig,
    ) -> Self {
        Self { schemas, config }
    }

    /// Get a specific schema by resource type.
    pub fn get_schema(&self, type_name: &str) -> Option<&ResourceSchema> {
        self.schemas.get(type_name)
    }

    /// All schemas, ordered by resource type.
    pub fn schemas(&self) -> impl Iterator<Item = &ResourceSchema> {
        self.schemas.values()
    }

    /// Registered resource types, in order.
    pub fn resource_types(&self) -> Vec<&str> {
        self.schemas.keys().map(String::as_str).collect()
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Check one schema for declaration defects.
    pub fn check_schema(schema: &ResourceSchema) -> SchemaResult<()> {
        Self::check_object(&schema.root, &AttributePath::root())
    }

    fn check_object(object: &ObjectDefinition, path: &AttributePath) -> SchemaResult<()> {
        if object.attributes.is_empty() {
            return Err(SchemaError::EmptyRecord {
                path: path.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for attr in &object.attributes {
            if attr.name.is_empty() {
                return Err(SchemaError::EmptyAttributeName {
                    path: path.to_string(),
                });
            }
            if !seen.insert(attr.name.as_str()) {
                return Err(SchemaError::DuplicateAttribute {
                    path: path.to_string(),
                    attribute: attr.name.clone(),
                });
            }

            let attr_path = path.at_attribute(&attr.name);
            for validator in &attr.validators {
                match validator.scope() {
                    ValidatorScope::Record => {
                        return Err(SchemaError::RecordRuleOnAttribute {
                            path: attr_path.to_string(),
                            rule: validator.name().to_string(),
                        });
                    }
                    ValidatorScope::Attribute if !attr.attribute_type.is_string() => {
                        return Err(SchemaError::incompatible_rule(
                            attr_path.to_string(),
                            validator.name(),
                            attr.attribute_type.to_string(),
                        ));
                    }
                    ValidatorScope::Attribute => {}
                }
            }

            if let Some(nested) = attr.attribute_type.nested_object() {
                Self::check_object(nested, &attr_path)?;
            }
        }

        for validator in &object.validators {
            match validator {
                Validator::ExactlyOneOf(rule) => {
                    if let Some(missing) = rule
                        .attributes()
                        .iter()
                        .find(|name| object.attribute(name).is_none())
                    {
                        return Err(SchemaError::UnknownSibling {
                            path: path.to_string(),
                            attribute: missing.clone(),
                        });
                    }
                }
                Validator::StringLength(_) | Validator::OneOf(_) => {
                    return Err(SchemaError::AttributeRuleOnRecord {
                        path: path.to_string(),
                        rule: validator.name().to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
