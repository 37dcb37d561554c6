//! Attribute values as authored in a resource configuration.
//!
//! [`AttributeValue`] is a closed tagged union. Every consumer matches on it
//! exhaustively, so a value of an unexpected kind is reported instead of
//! reaching a failed downcast at runtime.

use serde_json::{Map as JsonMap, Number, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A single configuration value.
#[derive(Debug, Clone)]
pub enum AttributeValue {
    /// Absent or explicitly null
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Ordered list
    List(Vec<AttributeValue>),
    /// Unordered set; element order carries no meaning
    Set(Vec<AttributeValue>),
    /// Mapping with operator-chosen keys
    Map(BTreeMap<String, AttributeValue>),
    /// Nested record whose legal keys are fixed by the schema
    Object(BTreeMap<String, AttributeValue>),
}

/// The kind of an [`AttributeValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    List,
    Set,
    Map,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "number",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Set => "set",
            ValueKind::Map => "map",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

impl AttributeValue {
    /// Build a string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Build a record from `(name, value)` pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, AttributeValue)>,
    {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a list of values.
    pub fn list<I: IntoIterator<Item = AttributeValue>>(items: I) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Build a set of values. Duplicates are kept so that validation can
    /// report them.
    pub fn set<I: IntoIterator<Item = AttributeValue>>(items: I) -> Self {
        Self::Set(items.into_iter().collect())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            AttributeValue::Null => ValueKind::Null,
            AttributeValue::Bool(_) => ValueKind::Bool,
            AttributeValue::Int(_) => ValueKind::Int,
            AttributeValue::Float(_) => ValueKind::Float,
            AttributeValue::String(_) => ValueKind::String,
            AttributeValue::List(_) => ValueKind::List,
            AttributeValue::Set(_) => ValueKind::Set,
            AttributeValue::Map(_) => ValueKind::Map,
            AttributeValue::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value as a float; integers widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Int(i) => Some(*i as f64),
            AttributeValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Entries of a record or map.
    pub fn as_entries(&self) -> Option<&BTreeMap<String, AttributeValue>> {
        match self {
            AttributeValue::Map(entries) | AttributeValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Elements of a list or set.
    pub fn as_elements(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::List(items) | AttributeValue::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a field of a record or an entry of a map.
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.as_entries().and_then(|entries| entries.get(key))
    }

    /// Whether a record field is present and non-null.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_null())
    }

    /// Positions of list or set elements that repeat an earlier element.
    pub fn duplicate_positions(&self) -> Vec<usize> {
        let Some(items) = self.as_elements() else {
            return Vec::new();
        };
        items
            .iter()
            .enumerate()
            .filter(|(i, item)| items[..*i].contains(item))
            .map(|(i, _)| i)
            .collect()
    }

    /// Convert back to JSON. Sets become arrays, records and maps objects.
    pub fn to_json(&self) -> Value {
        match self {
            AttributeValue::Null => Value::Null,
            AttributeValue::Bool(b) => Value::Bool(*b),
            AttributeValue::Int(i) => Value::Number((*i).into()),
            AttributeValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            AttributeValue::String(s) => Value::String(s.clone()),
            AttributeValue::List(items) | AttributeValue::Set(items) => {
                Value::Array(items.iter().map(AttributeValue::to_json).collect())
            }
            AttributeValue::Map(entries) | AttributeValue::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<JsonMap<_, _>>(),
            ),
        }
    }
}

impl PartialEq for AttributeValue {
    fn eq(&self, other: &Self) -> bool {
        use AttributeValue::*;
        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (String(a), String(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Set(a), Set(b)) => {
                a.len() == b.len()
                    && a.iter().all(|x| b.contains(x))
                    && b.iter().all(|x| a.contains(x))
            }
            (Map(a), Map(b)) | (Object(a), Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Default for AttributeValue {
    fn default() -> Self {
        Self::Null
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

/// Untyped conversion: arrays become lists and objects become records.
/// The schema walk accepts a list where a set is declared and a record where
/// a map is declared.
impl From<Value> for AttributeValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => AttributeValue::Null,
            Value::Bool(b) => AttributeValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => AttributeValue::Int(i),
                None => AttributeValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => AttributeValue::String(s),
            Value::Array(items) => {
                AttributeValue::List(items.into_iter().map(AttributeValue::from).collect())
            }
            Value::Object(entries) => AttributeValue::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, AttributeValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttributeValue::Null, Into::into)
    }
}
