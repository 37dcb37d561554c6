//! Core schema type definitions for administrative resources.
//!
//! A [`ResourceSchema`] is a fixed declaration of every attribute a resource
//! configuration or remote response may carry: its type, whether it is
//! required, optional or computed, and the rules attached to it.

use crate::validators::Validator;
use serde::Serialize;
use std::fmt;

/// A resource schema definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceSchema {
    /// Resource type name, e.g. `user`
    pub type_name: String,
    /// Schema description
    pub description: String,
    /// Schema version, bumped when the stored shape changes
    pub version: u64,
    /// Top-level record
    pub root: ObjectDefinition,
}

impl ResourceSchema {
    pub fn new(
        type_name: impl Into<String>,
        description: impl Into<String>,
        root: ObjectDefinition,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            description: description.into(),
            version: 0,
            root,
        }
    }

    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Look up a top-level attribute.
    pub fn attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.root.attribute(name)
    }
}

/// A record: an ordered list of attributes plus record-level rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectDefinition {
    /// Attributes in declaration order
    pub attributes: Vec<AttributeDefinition>,
    /// Rules evaluated against the whole record
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl ObjectDefinition {
    pub fn new(attributes: Vec<AttributeDefinition>) -> Self {
        Self {
            attributes,
            validators: Vec::new(),
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attributes.iter().find(|attr| attr.name == name)
    }
}

/// Definition of a single attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeDefinition {
    /// Attribute name
    pub name: String,
    /// Data type of the attribute
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    /// Who supplies the value
    pub presence: Presence,
    /// Whether the value must be hidden from plan output
    pub sensitive: bool,
    /// Attribute description
    pub description: String,
    /// Rules evaluated against this attribute's value
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl AttributeDefinition {
    /// An optional attribute of the given type.
    pub fn new(name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attribute_type,
            presence: Presence::Optional,
            sensitive: false,
            description: String::new(),
            validators: Vec::new(),
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::String)
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Bool)
    }

    pub fn int64(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Int64)
    }

    pub fn float64(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Float64)
    }

    pub fn string_list(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::list(AttributeType::String))
    }

    pub fn string_set(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::set(AttributeType::String))
    }

    pub fn string_map(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::map(AttributeType::String))
    }

    /// A single nested record.
    pub fn object(name: impl Into<String>, object: ObjectDefinition) -> Self {
        Self::new(name, AttributeType::Object(object))
    }

    /// An ordered list of nested records.
    pub fn object_list(name: impl Into<String>, object: ObjectDefinition) -> Self {
        Self::new(name, AttributeType::list(AttributeType::Object(object)))
    }

    /// An unordered set of nested records.
    pub fn object_set(name: impl Into<String>, object: ObjectDefinition) -> Self {
        Self::new(name, AttributeType::set(AttributeType::Object(object)))
    }

    pub fn required(mut self) -> Self {
        self.presence = Presence::Required;
        self
    }

    pub fn computed(mut self) -> Self {
        self.presence = Presence::Computed;
        self
    }

    pub fn optional_computed(mut self) -> Self {
        self.presence = Presence::OptionalComputed;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}

/// Who supplies an attribute's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Must be set in configuration
    Required,
    /// May be set in configuration
    Optional,
    /// Read-only; populated only from remote responses
    Computed,
    /// May be set; the remote service fills it in otherwise
    OptionalComputed,
}

impl Presence {
    pub fn is_required(&self) -> bool {
        matches!(self, Presence::Required)
    }

    /// Whether operators may set the attribute at all.
    pub fn is_configurable(&self) -> bool {
        !matches!(self, Presence::Computed)
    }
}

impl Default for Presence {
    fn default() -> Self {
        Self::Optional
    }
}

/// Attribute data types.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Bool,
    Int64,
    Float64,
    /// Ordered list of one element type
    List(Box<AttributeType>),
    /// Unordered set of one element type
    Set(Box<AttributeType>),
    /// String-keyed map of one element type
    Map(Box<AttributeType>),
    /// Nested record
    Object(ObjectDefinition),
}

impl AttributeType {
    pub fn list(element: AttributeType) -> Self {
        Self::List(Box::new(element))
    }

    pub fn set(element: AttributeType) -> Self {
        Self::Set(Box::new(element))
    }

    pub fn map(element: AttributeType) -> Self {
        Self::Map(Box::new(element))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, AttributeType::String)
    }

    /// The record definition reachable from this type, if any: the record
    /// itself or the element record of a collection.
    pub fn nested_object(&self) -> Option<&ObjectDefinition> {
        match self {
            AttributeType::Object(object) => Some(object),
            AttributeType::List(element) | AttributeType::Set(element) | AttributeType::Map(element) => {
                element.nested_object()
            }
            _ => None,
        }
    }
}

impl Default for AttributeType {
    fn default() -> Self {
        Self::String
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeType::String => f.write_str("string"),
            AttributeType::Bool => f.write_str("bool"),
            AttributeType::Int64 => f.write_str("number"),
            AttributeType::Float64 => f.write_str("float"),
            AttributeType::List(element) => write!(f, "list of {element}"),
            AttributeType::Set(element) => write!(f, "set of {element}"),
            AttributeType::Map(element) => write!(f, "map of {element}"),
            AttributeType::Object(_) => f.write_str("object"),
        }
    }
}
