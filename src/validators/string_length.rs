//! Inclusive bounds on the length of a string attribute.

use crate::context::ValidationContext;
use crate::diagnostics::Diagnostic;
use crate::error::{SchemaError, SchemaResult};
use crate::path::AttributePath;
use crate::value::AttributeValue;
use serde::Serialize;

/// Checks that a string is between `min` and `max` characters long.
///
/// Length is counted in Unicode scalar values, which is what an operator
/// reading the configuration would count, not in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringLengthValidator {
    min: usize,
    max: usize,
}

impl StringLengthValidator {
    /// Create the rule. Fails when `min > max`.
    pub fn new(min: usize, max: usize) -> SchemaResult<Self> {
        if min > max {
            return Err(SchemaError::InvalidLengthBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn validate(
        &self,
        context: &ValidationContext,
        path: &AttributePath,
        value: &AttributeValue,
    ) -> Vec<Diagnostic> {
        self.check(context, path, value, false)
    }

    /// Like [`StringLengthValidator::validate`], without quoting the value.
    pub fn validate_sensitive(
        &self,
        context: &ValidationContext,
        path: &AttributePath,
        value: &AttributeValue,
    ) -> Vec<Diagnostic> {
        self.check(context, path, value, true)
    }

    fn check(
        &self,
        _context: &ValidationContext,
        path: &AttributePath,
        value: &AttributeValue,
        sensitive: bool,
    ) -> Vec<Diagnostic> {
        let text = match value {
            AttributeValue::Null => return Vec::new(),
            AttributeValue::String(text) => text,
            other => return vec![super::unexpected_kind(path, "string", other)],
        };

        let length = text.chars().count();
        let shown = super::quoted(text, sensitive);
        let mut diagnostics = Vec::new();
        if length < self.min {
            diagnostics.push(Diagnostic::error(
                path.clone(),
                "Invalid Attribute Value Length",
                format!(
                    "Attribute {path} must be at least {} characters long, got {length}: {shown}",
                    self.min
                ),
            ));
        }
        if length > self.max {
            diagnostics.push(Diagnostic::error(
                path.clone(),
                "Invalid Attribute Value Length",
                format!(
                    "Attribute {path} must be at most {} characters long, got {length}: {shown}",
                    self.max
                ),
            ));
        }
        diagnostics
    }

    pub fn description(&self) -> String {
        format!(
            "string length must be between {} and {}",
            self.min, self.max
        )
    }

    pub fn markdown_description(&self) -> String {
        format!(
            "string length must be between `{}` and `{}`",
            self.min, self.max
        )
    }
}
