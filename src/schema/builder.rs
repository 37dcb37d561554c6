//! Builder for [`SchemaRegistry`] instances.
//!
//! The builder collects resource schemas and validation settings, then checks
//! everything at once in [`SchemaRegistryBuilder::build`]. Declaration errors
//! from the built-in resources are deferred to `build` as well, so a single
//! call reports the first defect found.

use super::registry::SchemaRegistry;
use super::resources;
use super::types::ResourceSchema;
use crate::config::ValidationConfig;
use crate::error::{SchemaError, SchemaResult};

use log::{debug, warn};
use std::collections::BTreeMap;

/// Builder for a [`SchemaRegistry`].
#[derive(Debug, Default)]
pub struct SchemaRegistryBuilder {
    schemas: Vec<SchemaResult<ResourceSchema>>,
    config: ValidationConfig,
}

impl SchemaRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every built-in resource schema.
    pub fn with_builtin_resources(mut self) -> Self {
        self.schemas.extend(resources::builtin_schemas());
        self
    }

    /// Add one resource schema.
    pub fn with_resource(mut self, schema: ResourceSchema) -> Self {
        self.schemas.push(Ok(schema));
        self
    }

    /// Add a schema produced by a fallible declaration function.
    pub fn with_declared_resource(mut self, schema: SchemaResult<ResourceSchema>) -> Self {
        self.schemas.push(schema);
        self
    }

    pub fn with_config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    /// Check every schema and build the registry.
    pub fn build(self) -> SchemaResult<SchemaRegistry> {
        let mut schemas = BTreeMap::new();
        for schema in self.schemas {
            let schema = schema?;
            SchemaRegistry::check_schema(&schema)?;
            if schemas.contains_key(&schema.type_name) {
                return Err(SchemaError::DuplicateResourceType {
                    type_name: schema.type_name,
                });
            }
            schemas.insert(schema.type_name.clone(), schema);
        }

        if !self.config.reject_unknown_attributes {
            warn!("Unknown attributes will be reported as warnings, not errors");
        }
        debug!(
            "Schema registry built with {} resource types: {}",
            schemas.len(),
            schemas.keys().cloned().collect::<Vec<_>>().join(", ")
        );

        Ok(SchemaRegistry::from_parts(schemas, self.config))
    }
}
