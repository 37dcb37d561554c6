//! Validation tests module.
//!
//! Tests are organized by rule and by concern: one module per rule, then the
//! structural checks, the built-in resources, diagnostic ordering and the
//! property-based contracts.

pub mod ordering;
pub mod resources;
pub mod string_length;
pub mod structure;

// Re-export commonly used test utilities
pub use crate::common::{
    builders::{GroupMemberBuilder, RecordBuilder, UserBuilder},
    context,
    fixtures::samples,
    paths, registry, summaries, validate,
};

// Re-export assertion macros
pub use crate::{assert_detail_contains, assert_diagnostic, assert_no_errors};
