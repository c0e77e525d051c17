use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// A secret as returned by the store after payload decoding, before any
/// transform. This is what the cache holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SecretValue {
    String(String),
    Map(IndexMap<String, String>),
}

impl SecretValue {
    /// Decodes a store payload. A JSON object becomes [`SecretValue::Map`];
    /// anything else, including invalid JSON, is kept verbatim as a string.
    pub fn from_payload(payload: String) -> Self {
        match serde_json::from_str::<Value>(&payload) {
            Ok(Value::Object(object)) => Self::Map(
                object
                    .into_iter()
                    .map(|(key, value)| (key, field_text(value)))
                    .collect(),
            ),
            _ => Self::String(payload),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Self::String(_) => None,
            Self::Map(map) => Some(map),
        }
    }

    /// Looks up one field of a key-value secret.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.as_map()?.get(key).map(String::as_str)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Map(_) => "mapping",
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::String(s) => Value::String(s.clone()),
            Self::Map(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            ),
        }
    }
}

impl From<SecretValue> for Value {
    fn from(value: SecretValue) -> Self {
        match value {
            SecretValue::String(s) => Value::String(s),
            SecretValue::Map(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::String(v)))
                    .collect(),
            ),
        }
    }
}

fn field_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
