//! Context handed to every rule during a validation pass.

use std::fmt;

/// Lifecycle step that triggered validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Planning a create from operator configuration
    Create,
    /// Checking a value mapped from a remote API response
    Read,
    /// Planning an update from operator configuration
    Update,
}

impl Operation {
    /// Whether the value being validated was authored by an operator, as
    /// opposed to mapped from the remote service.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Operation::Create | Operation::Update)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => f.write_str("create"),
            Operation::Read => f.write_str("read"),
            Operation::Update => f.write_str("update"),
        }
    }
}

/// Which resource is being validated, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    resource_type: String,
    operation: Operation,
}

impl ValidationContext {
    pub fn new(resource_type: impl Into<String>, operation: Operation) -> Self {
        Self {
            resource_type: resource_type.into(),
            operation,
        }
    }

    pub fn create(resource_type: impl Into<String>) -> Self {
        Self::new(resource_type, Operation::Create)
    }

    pub fn update(resource_type: impl Into<String>) -> Self {
        Self::new(resource_type, Operation::Update)
    }

    pub fn read(resource_type: impl Into<String>) -> Self {
        Self::new(resource_type, Operation::Read)
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }
}
