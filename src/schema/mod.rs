//! Schema definitions and validation for administrative resources.
//!
//! This module provides the schema registry and the validation walk that
//! checks resource configurations and API responses against the built-in
//! resource declarations.
//!
//! # Key Types
//!
//! - [`ResourceSchema`] - Declaration of one resource type
//! - [`SchemaRegistry`] - Registry for looking up schemas and validating values
//! - [`AttributeDefinition`] - Individual attribute specifications and rules
//!
//! # Examples
//!
//! ```rust
//! use admin_schema::schema::SchemaRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let user_schema = registry.get_schema("user");
//! assert!(user_schema.is_some());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod registry;
pub mod resources;
pub mod types;
pub mod validation;


// Re-export the main types for convenience
pub use builder::SchemaRegistryBuilder;
pub use registry::SchemaRegistry;
pub use resources::ResourceModel;
pub use types::{AttributeDefinition, AttributeType, ObjectDefinition, Presence, ResourceSchema};
