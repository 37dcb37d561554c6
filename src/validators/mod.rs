//! Attribute validation rules.
//!
//! The supported rules form a closed set, [`Validator`]. Each variant has one
//! evaluation function, so the full behavior of the engine is visible from
//! this module:
//!
//! - [`StringLengthValidator`] - inclusive length bounds on a string
//! - [`OneOfValidator`] - membership in a fixed list of options
//! - [`ExactlyOneOfValidator`] - exactly one of a group of siblings is set
//!
//! Rules are pure: the same input always yields the same diagnostics, and no
//! rule keeps state between calls. Misconfigured rules are rejected when they
//! are built.
//!
//! # Examples
//!
//! ```rust
//! use admin_schema::context::ValidationContext;
//! use admin_schema::path::AttributePath;
//! use admin_schema::validators::Validator;
//! use admin_schema::value::AttributeValue;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rule = Validator::one_of(["ADMIN", "MEMBER"])?;
//! let diagnostics = rule.validate(
//!     &ValidationContext::create("group_member"),
//!     &AttributePath::attribute("role"),
//!     &AttributeValue::string("OWNER"),
//! );
//! assert_eq!(diagnostics.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod exactly_one_of;
pub mod one_of;
pub mod string_length;

pub use exactly_one_of::ExactlyOneOfValidator;
pub use one_of::OneOfValidator;
pub use string_length::StringLengthValidator;

use crate::context::ValidationContext;
use crate::diagnostics::Diagnostic;
use crate::error::SchemaResult;
use crate::path::AttributePath;
use crate::value::AttributeValue;
use log::trace;
use serde::Serialize;

/// What a rule is attached to in a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorScope {
    /// A single attribute; the rule receives that attribute's value
    Attribute,
    /// A record; the rule receives the whole record
    Record,
}

/// A configured validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Validator {
    StringLength(StringLengthValidator),
    OneOf(OneOfValidator),
    ExactlyOneOf(ExactlyOneOfValidator),
}

impl Validator {
    /// String length between `min` and `max` characters, inclusive.
    pub fn string_length(min: usize, max: usize) -> SchemaResult<Self> {
        StringLengthValidator::new(min, max).map(Self::StringLength)
    }

    /// String equal to one of `options`.
    pub fn one_of<I, S>(options: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OneOfValidator::new(options).map(Self::OneOf)
    }

    /// Exactly one of the sibling `attributes` set.
    pub fn exactly_one_of<I, S>(attributes: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExactlyOneOfValidator::new(attributes).map(Self::ExactlyOneOf)
    }

    /// Short rule name used in schema errors.
    pub fn name(&self) -> &'static str {
        match self {
            Validator::StringLength(_) => "string_length",
            Validator::OneOf(_) => "one_of",
            Validator::ExactlyOneOf(_) => "exactly_one_of",
        }
    }

    pub fn scope(&self) -> ValidatorScope {
        match self {
            Validator::StringLength(_) | Validator::OneOf(_) => ValidatorScope::Attribute,
            Validator::ExactlyOneOf(_) => ValidatorScope::Record,
        }
    }

    /// Evaluate the rule.
    ///
    /// For attribute-scoped rules `value` is the attribute's value and `path`
    /// its location. For record-scoped rules `value` is the enclosing record
    /// and `path` the record's location.
    pub fn validate(
        &self,
        context: &ValidationContext,
        path: &AttributePath,
        value: &AttributeValue,
    ) -> Vec<Diagnostic> {
        self.dispatch(context, path, value, false)
    }

    /// Evaluate the rule for a sensitive attribute. Diagnostics describe the
    /// violation without quoting the value.
    pub fn validate_sensitive(
        &self,
        context: &ValidationContext,
        path: &AttributePath,
        value: &AttributeValue,
    ) -> Vec<Diagnostic> {
        self.dispatch(context, path, value, true)
    }

    fn dispatch(
        &self,
        context: &ValidationContext,
        path: &AttributePath,
        value: &AttributeValue,
        sensitive: bool,
    ) -> Vec<Diagnostic> {
        trace!(
            "{} {}: checking {} ({})",
            context.operation(),
            context.resource_type(),
            path,
            self.name()
        );
        match (self, sensitive) {
            (Validator::StringLength(rule), false) => rule.validate(context, path, value),
            (Validator::StringLength(rule), true) => rule.validate_sensitive(context, path, value),
            (Validator::OneOf(rule), false) => rule.validate(context, path, value),
            (Validator::OneOf(rule), true) => rule.validate_sensitive(context, path, value),
            // Only names sibling attributes, never values.
            (Validator::ExactlyOneOf(rule), _) => rule.validate(context, path, value),
        }
    }

    /// One-line explanation of the rule for generated documentation.
    pub fn description(&self) -> String {
        match self {
            Validator::StringLength(rule) => rule.description(),
            Validator::OneOf(rule) => rule.description(),
            Validator::ExactlyOneOf(rule) => rule.description(),
        }
    }

    /// Same as [`Validator::description`], formatted as Markdown.
    pub fn markdown_description(&self) -> String {
        match self {
            Validator::StringLength(rule) => rule.markdown_description(),
            Validator::OneOf(rule) => rule.markdown_description(),
            Validator::ExactlyOneOf(rule) => rule.markdown_description(),
        }
    }
}

/// A string value as it may appear in a diagnostic detail.
pub(crate) fn quoted(text: &str, sensitive: bool) -> String {
    if sensitive {
        "(sensitive value)".to_string()
    } else {
        format!("{text:?}")
    }
}

/// Diagnostic for a rule handed a value it cannot inspect.
pub(crate) fn unexpected_kind(
    path: &AttributePath,
    expected: &str,
    actual: &AttributeValue,
) -> Diagnostic {
    Diagnostic::error(
        path.clone(),
        "Incorrect attribute value type",
        format!(
            "Attribute {path} must be of type {expected}, got {}",
            actual.kind()
        ),
    )
}
