//! Backing objects the generator reads attribute values from.
//!
//! A backing object is anything implementing [`AttributeSource`]. A lookup
//! that returns `None` means the object does not expose the attribute at all;
//! an exposed attribute holding null comes back as `Some(Value::Null)`.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::error::{PairError, Result};
use crate::value::{kind_name, Value};

/// Read-only attribute access over a backing object.
pub trait AttributeSource {
    /// Read the named attribute, or `None` when the object does not expose it.
    fn read_attribute(&self, name: &str) -> Option<Value>;
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    fn read_attribute(&self, name: &str) -> Option<Value> {
        (**self).read_attribute(name)
    }
}

impl<T: AttributeSource + ?Sized> AttributeSource for Box<T> {
    fn read_attribute(&self, name: &str) -> Option<Value> {
        (**self).read_attribute(name)
    }
}

impl AttributeSource for serde_json::Map<String, Value> {
    fn read_attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Objects expose their keys; every other JSON value exposes nothing.
impl AttributeSource for Value {
    fn read_attribute(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|map| map.read_attribute(name))
    }
}

impl AttributeSource for HashMap<String, Value> {
    fn read_attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl AttributeSource for BTreeMap<String, Value> {
    fn read_attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// An owned attribute record, typically loaded from JSON/YAML or built from
/// a serializable struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    attributes: serde_json::Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from any type that serializes to an object.
    pub fn from_serialize<T: Serialize + ?Sized>(object: &T) -> Result<Self> {
        Self::try_from(serde_json::to_value(object)?)
    }

    /// Add or replace an attribute.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl TryFrom<Value> for Record {
    type Error = PairError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(attributes) => Ok(Self { attributes }),
            other => Err(PairError::NotARecord {
                kind: kind_name(&other),
            }),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Record {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Record::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl AttributeSource for Record {
    fn read_attribute(&self, name: &str) -> Option<Value> {
        self.attributes.read_attribute(name)
    }
}
