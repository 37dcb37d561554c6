//! Membership of a string attribute in a fixed list of options.

use crate::context::ValidationContext;
use crate::diagnostics::Diagnostic;
use crate::error::{SchemaError, SchemaResult};
use crate::path::AttributePath;
use crate::value::AttributeValue;
use serde::Serialize;

/// Checks that a string equals one of the configured options.
///
/// Matching is exact and case-sensitive. Options keep the order they were
/// supplied in, which is also the order they are listed in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OneOfValidator {
    options: Vec<String>,
}

impl OneOfValidator {
    /// Create the rule. Fails on an empty or repeating option list.
    pub fn new<I, S>(options: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(SchemaError::EmptyOptions);
        }
        for (i, option) in options.iter().enumerate() {
            if options[..i].contains(option) {
                return Err(SchemaError::DuplicateOption {
                    option: option.clone(),
                });
            }
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn validate(
        &self,
        context: &ValidationContext,
        path: &AttributePath,
        value: &AttributeValue,
    ) -> Vec<Diagnostic> {
        self.check(context, path, value, false)
    }

    /// Like [`OneOfValidator::validate`], without quoting the value.
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

        if self.options.iter().any(|option| option == text) {
            return Vec::new();
        }

        vec![Diagnostic::error(
            path.clone(),
            "Invalid Attribute Value Match",
            format!(
                "Attribute {path} value must be one of: {}; got: {}",
                self.options.join(", "),
                super::quoted(text, sensitive)
            ),
        )]
    }

    pub fn description(&self) -> String {
        format!("value must be one of: {}", self.options.join(", "))
    }

    pub fn markdown_description(&self) -> String {
        let options: Vec<String> = self.options.iter().map(|o| format!("`{o}`")).collect();
        format!("value must be one of: {}", options.join(", "))
    }
}
