use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// The result of a `secret` call, mirroring the request shape.
///
/// Untransformed strings come back as [`Value::String`] and key-value secrets
/// as [`Value::Object`]; transforms may produce any JSON value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resolved {
    Value(Value),
    Keyed(IndexMap<String, Value>),
    Composite(Vec<Resolved>),
}

impl Resolved {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_value()?.as_str()
    }

    pub fn as_keyed(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Keyed(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&[Resolved]> {
        match self {
            Self::Composite(members) => Some(members),
            _ => None,
        }
    }

    /// Renders the whole shape as JSON: keyed results become objects and
    /// composite results arrays.
    pub fn into_value(self) -> Value {
        match self {
            Self::Value(value) => value,
            Self::Keyed(entries) => Value::Object(entries.into_iter().collect()),
            Self::Composite(members) => {
                Value::Array(members.into_iter().map(Self::into_value).collect())
            }
        }
    }

    /// Deserialises the JSON rendering into `T`.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.into_value())?)
    }
}

impl From<Resolved> for Value {
    fn from(resolved: Resolved) -> Self {
        resolved.into_value()
    }
}
