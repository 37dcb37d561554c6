//! Schema validation logic for resource configurations.
//!
//! A validation pass walks the resource schema in declaration order. For each
//! attribute it runs the structural checks (presence, read-only, value kind,
//! set uniqueness) and then the attribute's rules, recursing into nested
//! records. After a record's attributes come its unknown-key check and its
//! record-level rules. Attached rules only run when validating configuration
//! (create or update); a read is checked structurally. Nothing short-circuits: every violation in the
//! configuration is reported in one pass, always in the same order.

use super::registry::SchemaRegistry;
use super::resources::ResourceModel;
use super::types::{AttributeDefinition, AttributeType, ObjectDefinition, ResourceSchema};
use crate::config::ValidationConfig;
use crate::context::{Operation, ValidationContext};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{AdminSchemaResult, ValidationError, ValidationResult};
use crate::path::AttributePath;
use crate::validators;
use crate::value::AttributeValue;

use log::debug;
use std::collections::BTreeMap;
use std::panic;
use std::thread;

static NULL: AttributeValue = AttributeValue::Null;

impl SchemaRegistry {
    /// Validate a resource value against the schema named by
    /// `context.resource_type()`.
    ///
    /// The only failure is an unregistered resource type; everything wrong
    /// with the value itself is reported through the returned diagnostics.
    pub fn validate_resource(
        &self,
        value: &AttributeValue,
        context: &ValidationContext,
    ) -> ValidationResult<Diagnostics> {
        let schema = self.require_schema(context)?;
        let walker = Walker::new(context, self.config());
        let root = AttributePath::root();

        let mut diagnostics = Diagnostics::new();
        match value {
            AttributeValue::Object(fields) | AttributeValue::Map(fields) => {
                walker.record(&schema.root, &root, fields, value, &mut diagnostics)
            }
            other => diagnostics.push(validators::unexpected_kind(&root, "object", other)),
        }

        log_summary(schema, context, &diagnostics);
        Ok(diagnostics)
    }

    /// Same as [`SchemaRegistry::validate_resource`], checking top-level
    /// attributes on worker threads.
    ///
    /// Each attribute gets its own collector; collectors are merged in
    /// declaration order, so the result is identical to the sequential pass.
    pub fn validate_resource_concurrently(
        &self,
        value: &AttributeValue,
        context: &ValidationContext,
    ) -> ValidationResult<Diagnostics> {
        let schema = self.require_schema(context)?;
        let fields = match value {
            AttributeValue::Object(fields) | AttributeValue::Map(fields) => fields,
            _ => return self.validate_resource(value, context),
        };

        let walker = Walker::new(context, self.config());
        let root = AttributePath::root();
        let attributes = &schema.root.attributes;
        let chunk_size = attributes
            .len()
            .div_ceil(self.config().effective_threads())
            .max(1);

        let per_attribute: Vec<Diagnostics> = thread::scope(|scope| {
            let walker = &walker;
            let root = &root;
            let handles: Vec<_> = attributes
                .chunks(chunk_size)
                .map(|group| {
                    scope.spawn(move || {
                        group
                            .iter()
                            .map(|attr| {
                                let mut collected = Diagnostics::new();
                                walker.attribute(attr, root, lookup(fields, attr), &mut collected);
                                collected
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| panic::resume_unwind(payload))
                })
                .collect()
        });

        let mut diagnostics = Diagnostics::new();
        for collected in per_attribute {
            diagnostics.append(collected);
        }
        walker.record_level(&schema.root, &root, fields, value, &mut diagnostics);

        log_summary(schema, context, &diagnostics);
        Ok(diagnostics)
    }

    /// Validate a typed resource model.
    pub fn validate_model<M: ResourceModel>(
        &self,
        model: &M,
        operation: Operation,
    ) -> AdminSchemaResult<Diagnostics> {
        let value = model.to_attribute_value()?;
        let context = ValidationContext::new(M::TYPE_NAME, operation);
        Ok(self.validate_resource(&value, &context)?)
    }

    fn require_schema(&self, context: &ValidationContext) -> ValidationResult<&ResourceSchema> {
        self.get_schema(context.resource_type())
            .ok_or_else(|| ValidationError::unknown_resource_type(context.resource_type()))
    }
}

fn lookup<'a>(fields: &'a BTreeMap<String, AttributeValue>, attr: &AttributeDefinition) -> &'a AttributeValue {
    fields.get(&attr.name).unwrap_or(&NULL)
}

fn log_summary(schema: &ResourceSchema, context: &ValidationContext, diagnostics: &Diagnostics) {
    debug!(
        "Validated {} for {}: {} diagnostics ({} errors)",
        schema.type_name,
        context.operation(),
        diagnostics.len(),
        diagnostics.errors().count()
    );
}

/// One validation pass over one resource value.
struct Walker<'a> {
    context: &'a ValidationContext,
    config: &'a ValidationConfig,
}

impl<'a> Walker<'a> {
    fn new(context: &'a ValidationContext, config: &'a ValidationConfig) -> Self {
        Self { context, config }
    }

    fn record(
        &self,
        object: &ObjectDefinition,
        path: &AttributePath,
        fields: &BTreeMap<String, AttributeValue>,
        record: &AttributeValue,
        out: &mut Diagnostics,
    ) {
        for attr in &object.attributes {
            self.attribute(attr, path, lookup(fields, attr), out);
        }
        self.record_level(object, path, fields, record, out);
    }

    /// Unknown keys, then record-level rules.
    fn record_level(
        &self,
        object: &ObjectDefinition,
        path: &AttributePath,
        fields: &BTreeMap<String, AttributeValue>,
        record: &AttributeValue,
        out: &mut Diagnostics,
    ) {
        for key in fields.keys() {
            if object.attribute(key).is_some() {
                continue;
            }
            let location = if path.is_root() {
                "the top level".to_string()
            } else {
                path.to_string()
            };
            let summary = "Unsupported argument";
            let detail = format!("An argument named {key:?} is not expected at {location}.");
            let key_path = path.at_attribute(key);
            if self.config.reject_unknown_attributes {
                out.push(Diagnostic::error(key_path, summary, detail));
            } else {
                out.push(Diagnostic::warning(key_path, summary, detail));
            }
        }

        if !self.context.operation().is_configuration() {
            return;
        }
        for validator in &object.validators {
            out.extend(validator.validate(self.context, path, record));
        }
    }

    fn attribute(
        &self,
        attr: &AttributeDefinition,
        parent: &AttributePath,
        value: &AttributeValue,
        out: &mut Diagnostics,
    ) {
        let path = parent.at_attribute(&attr.name);

        if value.is_null() {
            if attr.presence.is_required() && self.context.operation().is_configuration() {
                out.push(Diagnostic::error(
                    path.clone(),
                    "Missing required argument",
                    format!(
                        "The argument {:?} is required, but no definition was found at {path}.",
                        attr.name
                    ),
                ));
            }
            return;
        }

        if !attr.presence.is_configurable() && self.context.operation().is_configuration() {
            out.push(Diagnostic::error(
                path.clone(),
                "Invalid configuration for read-only attribute",
                format!(
                    "Attribute {path} is computed by the remote service and cannot be set. \
                     Remove the configuration line setting the value."
                ),
            ));
            return;
        }

        if !self.value(&attr.attribute_type, &path, value, out) {
            return;
        }

        // Rules constrain configuration; values read back from the API are
        // only checked structurally.
        if !self.context.operation().is_configuration() {
            return;
        }
        for validator in &attr.validators {
            if attr.sensitive {
                out.extend(validator.validate_sensitive(self.context, &path, value));
            } else {
                out.extend(validator.validate(self.context, &path, value));
            }
        }
    }

    /// Structural check of `value` against `attribute_type`, recursing into
    /// collections and records. Returns false when the value's kind does not
    /// match, in which case nothing below it was checked.
    fn value(
        &self,
        attribute_type: &AttributeType,
        path: &AttributePath,
        value: &AttributeValue,
        out: &mut Diagnostics,
    ) -> bool {
        match (attribute_type, value) {
            (_, AttributeValue::Null) => true,
            (AttributeType::String, AttributeValue::String(_))
            | (AttributeType::Bool, AttributeValue::Bool(_))
            | (AttributeType::Int64, AttributeValue::Int(_))
            | (AttributeType::Float64, AttributeValue::Float(_) | AttributeValue::Int(_)) => true,
            (AttributeType::List(element), AttributeValue::List(items)) => {
                for (index, item) in items.iter().enumerate() {
                    self.value(element, &path.at_index(index), item, out);
                }
                true
            }
            (AttributeType::Set(element), AttributeValue::Set(items) | AttributeValue::List(items)) => {
                for index in value.duplicate_positions() {
                    out.push(Diagnostic::error(
                        path.at_index(index),
                        "Duplicate set element",
                        format!(
                            "Attribute {path} has a duplicate element at index {index}: {}",
                            items[index]
                        ),
                    ));
                }
                for (index, item) in items.iter().enumerate() {
                    self.value(element, &path.at_index(index), item, out);
                }
                true
            }
            (AttributeType::Map(element), AttributeValue::Map(entries) | AttributeValue::Object(entries)) => {
                for (key, entry) in entries {
                    self.value(element, &path.at_key(key), entry, out);
                }
                true
            }
            (AttributeType::Object(object), AttributeValue::Object(fields) | AttributeValue::Map(fields)) => {
                self.record(object, path, fields, value, out);
                true
            }
            (expected, actual) => {
                out.push(validators::unexpected_kind(path, &expected.to_string(), actual));
                false
            }
        }
    }
}
