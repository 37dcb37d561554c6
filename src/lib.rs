//! Resource schemas and attribute validation for directory administration.
//!
//! Declares the administrative resource types (users, groups, memberships,
//! organizational units, roles, domains and custom schemas) and validates
//! configuration values and API responses against them. Every violation in
//! a value is reported in one pass as a [`Diagnostic`] anchored at the
//! offending attribute's path.
//!
//! # Core Components
//!
//! - [`SchemaRegistry`] - Built-in resource schemas plus the validation walk
//! - [`Validator`] - Rules attachable to attributes and records
//! - [`Diagnostics`] - Ordered collection of reported violations
//!
//! # Quick Start
//!
//! ```rust
//! use admin_schema::{AttributeValue, SchemaRegistry, ValidationContext};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let member = AttributeValue::from(json!({
//!     "group_id": "eng",
//!     "email": "jdoe@example.com",
//!     "role": "OWNER"
//! }));
//! let diagnostics = registry.validate_resource(&member, &ValidationContext::create("group_member"))?;
//! assert!(!diagnostics.has_errors());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod docs;
pub mod error;
pub mod path;
pub mod schema;
pub mod validators;
pub mod value;

// Re-export commonly used types for convenience
pub use config::ValidationConfig;
pub use context::{Operation, ValidationContext};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{
    AdminSchemaError, AdminSchemaResult, SchemaError, SchemaResult, ValidationError,
    ValidationResult,
};
pub use path::{AttributePath, PathStep};
pub use schema::{
    AttributeDefinition, AttributeType, ObjectDefinition, Presence, ResourceModel, ResourceSchema,
    SchemaRegistry, SchemaRegistryBuilder,
};
pub use validators::{Validator, ValidatorScope};
pub use value::{AttributeValue, ValueKind};
