//! Error types for schema construction and validation.
//!
//! Operator mistakes in a configuration never show up here: those are
//! reported as [`Diagnostic`](crate::diagnostics::Diagnostic)s. The errors in
//! this module describe defects in the provider's own schema declarations
//! ([`SchemaError`]) or misuse of the validation entry points
//! ([`ValidationError`]).

/// Main error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum AdminSchemaError {
    /// A schema or rule declaration is inconsistent
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A validation pass could not be started
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Misconfiguration in a schema or rule declaration.
///
/// These are programmer errors. They surface when a rule is constructed or
/// when the registry is built, independent of any configuration instance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// String length rule with a lower bound above the upper bound
    #[error("Invalid length bounds: min {min} is greater than max {max}")]
    InvalidLengthBounds { min: usize, max: usize },

    /// Enumerated option rule without any options
    #[error("Option list cannot be empty")]
    EmptyOptions,

    /// Enumerated option rule listing the same option twice
    #[error("Option '{option}' is listed more than once")]
    DuplicateOption { option: String },

    /// Exactly-one-of rule without any attributes
    #[error("Exactly-one-of group cannot be empty")]
    EmptyAttributeGroup,

    /// Exactly-one-of rule naming the same attribute twice
    #[error("Attribute '{attribute}' is listed more than once in an exactly-one-of group")]
    DuplicateGroupMember { attribute: String },

    /// Exactly-one-of rule naming an attribute that is not a sibling
    #[error("Exactly-one-of group at '{path}' references unknown attribute '{attribute}'")]
    UnknownSibling { path: String, attribute: String },

    /// Attribute-level rule attached to an attribute of the wrong type
    #[error("Rule '{rule}' cannot be attached to {attribute_type} attribute '{path}'")]
    IncompatibleRule {
        path: String,
        rule: String,
        attribute_type: String,
    },

    /// Record-level rule attached to a single attribute
    #[error("Rule '{rule}' at '{path}' must be attached to the enclosing record")]
    RecordRuleOnAttribute { path: String, rule: String },

    /// Attribute-level rule attached to a record
    #[error("Rule '{rule}' at '{path}' must be attached to an attribute")]
    AttributeRuleOnRecord { path: String, rule: String },

    /// Two attributes with the same name in one record
    #[error("Duplicate attribute '{attribute}' at '{path}'")]
    DuplicateAttribute { path: String, attribute: String },

    /// Record declared without any attributes
    #[error("Record at '{path}' declares no attributes")]
    EmptyRecord { path: String },

    /// Attribute with an empty name
    #[error("Attribute name at '{path}' cannot be empty")]
    EmptyAttributeName { path: String },

    /// Two schemas registered under the same resource type
    #[error("Resource type '{type_name}' is registered more than once")]
    DuplicateResourceType { type_name: String },
}

/// Failure to start a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No schema is registered under the requested resource type
    #[error("Unknown resource type: {type_name}")]
    UnknownResourceType { type_name: String },
}

impl ValidationError {
    /// Create an unknown resource type error
    pub fn unknown_resource_type(type_name: impl Into<String>) -> Self {
        Self::UnknownResourceType {
            type_name: type_name.into(),
        }
    }
}

impl SchemaError {
    /// Create an incompatible rule error
    pub fn incompatible_rule(
        path: impl Into<String>,
        rule: impl Into<String>,
        attribute_type: impl Into<String>,
    ) -> Self {
        Self::IncompatibleRule {
            path: path.into(),
            rule: rule.into(),
            attribute_type: attribute_type.into(),
        }
    }
}

/// Result type for crate operations
pub type AdminSchemaResult<T> = Result<T, AdminSchemaError>;

/// Result type for schema construction
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type for validation entry points
pub type ValidationResult<T> = Result<T, ValidationError>;
