//! Exactly one attribute of a sibling group must be configured.

use crate::context::ValidationContext;
use crate::diagnostics::Diagnostic;
use crate::error::{SchemaError, SchemaResult};
use crate::path::AttributePath;
use crate::value::AttributeValue;
use serde::Serialize;

/// Record-level rule over a group of sibling attributes.
///
/// Unlike the per-attribute rules this one needs every sibling at once, so it
/// is handed the enclosing record rather than a single attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExactlyOneOfValidator {
    attributes: Vec<String>,
}

impl ExactlyOneOfValidator {
    /// Create the rule. Fails on an empty or repeating group.
    ///
    /// Whether the named attributes exist in the enclosing record is checked
    /// when the schema is registered.
    pub fn new<I, S>(attributes: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let attributes: Vec<String> = attributes.into_iter().map(Into::into).collect();
        if attributes.is_empty() {
            return Err(SchemaError::EmptyAttributeGroup);
        }
        for (i, attribute) in attributes.iter().enumerate() {
            if attributes[..i].contains(attribute) {
                return Err(SchemaError::DuplicateGroupMember {
                    attribute: attribute.clone(),
                });
            }
        }
        Ok(Self { attributes })
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Validate the record found at `path`.
    pub fn validate(
        &self,
        _context: &ValidationContext,
        path: &AttributePath,
        record: &AttributeValue,
    ) -> Vec<Diagnostic> {
        match record {
            AttributeValue::Null => return Vec::new(),
            AttributeValue::Object(_) | AttributeValue::Map(_) => {}
            other => return vec![super::unexpected_kind(path, "object", other)],
        }

        let (set, unset): (Vec<&str>, Vec<&str>) = self
            .attributes
            .iter()
            .map(String::as_str)
            .partition(|name| record.is_set(name));

        if set.len() == 1 {
            return Vec::new();
        }

        let anchor = set.first().copied().unwrap_or(self.attributes[0].as_str());
        vec![Diagnostic::error(
            path.at_attribute(anchor),
            "Invalid Attribute Combination",
            format!(
                "Exactly one of these attributes must be configured: [{}]; set: [{}], unset: [{}]",
                self.attributes.join(", "),
                set.join(", "),
                unset.join(", ")
            ),
        )]
    }

    pub fn description(&self) -> String {
        format!(
            "exactly one of these attributes must be configured: [{}]",
            self.attributes.join(", ")
        )
    }

    pub fn markdown_description(&self) -> String {
        let attributes: Vec<String> = self.attributes.iter().map(|a| format!("`{a}`")).collect();
        format!(
            "exactly one of these attributes must be configured: [{}]",
            attributes.join(", ")
        )
    }
}
