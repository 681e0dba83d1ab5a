use crate::types::Field;
use derive_more::{Deref, DerefMut};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

///
/// Record
///
/// One instance of a record type: a mapping from field slug to JSON value.
/// Keys are kept as raw strings so undeclared keys survive until validation
/// can reject them by name.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert used by seed data and tests.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Value stored under a declared field, if any.
    #[must_use]
    pub fn field(&self, field: Field) -> Option<&Value> {
        self.0.get(field.as_str())
    }

    pub fn set(&mut self, field: Field, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.as_str().to_string(), value.into())
    }

    pub fn remove_field(&mut self, field: Field) -> Option<Value> {
        self.0.remove(field.as_str())
    }

    /// String value of a field, when the field holds a string.
    #[must_use]
    pub fn str_field(&self, field: Field) -> Option<&str> {
        self.field(field).and_then(Value::as_str)
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.str_field(Field::Id)
    }

    #[must_use]
    pub fn parent_id(&self) -> Option<&str> {
        self.str_field(Field::ParentId)
    }

    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Record {
    type Error = Value;

    /// Only JSON objects are records; anything else is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Object(record.0)
    }
}
