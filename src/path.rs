//! Attribute paths.
//!
//! An [`AttributePath`] names one location inside a resource value, e.g.
//! `addresses[0].type` or `custom_schemas[1].schema_values["level"]`. Paths
//! are used to read values for validation and to point diagnostics at the
//! exact location they concern.

use crate::value::AttributeValue;
use serde::{Serialize, Serializer};
use std::fmt;

/// One step of an [`AttributePath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Field of a record
    Attribute(String),
    /// Position in a list or set
    Index(usize),
    /// Key of a map
    Key(String),
}

/// Location of a value inside a resource.
///
/// The empty path designates the resource root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributePath {
    steps: Vec<PathStep>,
}

impl AttributePath {
    /// The resource root.
    pub fn root() -> Self {
        Self::default()
    }

    /// A top-level attribute.
    pub fn attribute(name: impl Into<String>) -> Self {
        Self::root().at_attribute(name)
    }

    pub fn at_attribute(&self, name: impl Into<String>) -> Self {
        self.with_step(PathStep::Attribute(name.into()))
    }

    pub fn at_index(&self, index: usize) -> Self {
        self.with_step(PathStep::Index(index))
    }

    pub fn at_key(&self, key: impl Into<String>) -> Self {
        self.with_step(PathStep::Key(key.into()))
    }

    fn with_step(&self, step: PathStep) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step);
        Self { steps }
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// The enclosing location, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.steps.split_last()?;
        Some(Self {
            steps: rest.to_vec(),
        })
    }

    /// Follow the path from `root`. Returns `None` when any step is missing
    /// or does not apply to the value found at that point.
    pub fn resolve<'a>(&self, root: &'a AttributeValue) -> Option<&'a AttributeValue> {
        self.steps.iter().try_fold(root, |current, step| match step {
            PathStep::Attribute(name) => match current {
                AttributeValue::Object(fields) => fields.get(name),
                _ => None,
            },
            PathStep::Key(key) => match current {
                AttributeValue::Map(entries) | AttributeValue::Object(entries) => entries.get(key),
                _ => None,
            },
            PathStep::Index(index) => current.as_elements().and_then(|items| items.get(*index)),
        })
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("<root>");
        }
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if i == 0 => write!(f, "{name}")?,
                PathStep::Attribute(name) => write!(f, ".{name}")?,
                PathStep::Index(index) => write!(f, "[{index}]")?,
                PathStep::Key(key) => write!(f, "[{key:?}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for AttributePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
