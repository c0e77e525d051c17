use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    dal::model::json_kind,
    error::{Result, SecretsCacheError},
};

/// What to resolve in one `secret` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SecretRequest {
    /// One secret identifier.
    Scalar(String),
    /// Local names mapped to secret identifiers, resolved into a mapping with
    /// the same names in the same order.
    Keyed(IndexMap<String, String>),
    /// An ordered sequence of scalar or keyed members.
    Composite(Vec<SecretMember>),
}

/// A member of a [`SecretRequest::Composite`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SecretMember {
    Scalar(String),
    Keyed(IndexMap<String, String>),
}

impl SecretRequest {
    pub fn scalar(secret_id: impl Into<String>) -> Self {
        Self::Scalar(secret_id.into())
    }

    pub fn keyed<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Keyed(keyed_map(entries))
    }

    pub fn composite<I, M>(members: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<SecretMember>,
    {
        Self::Composite(members.into_iter().map(Into::into).collect())
    }

    /// Infers a request from its JSON description: a string is a scalar, an
    /// object of strings is keyed, an array of those is composite.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(id) => Ok(Self::Scalar(id.clone())),
            Value::Object(_) => Ok(Self::Keyed(keyed_from_json(value)?)),
            Value::Array(items) => items
                .iter()
                .map(SecretMember::from_json)
                .collect::<Result<Vec<_>>>()
                .map(Self::Composite),
            other => Err(SecretsCacheError::InvalidRequest(format!(
                "expected a string, object or array, got {}",
                json_kind(other)
            ))),
        }
    }

    /// Every identifier the request names, in request order, repeats included.
    pub fn secret_ids(&self) -> Vec<&str> {
        match self {
            Self::Scalar(id) => vec![id.as_str()],
            Self::Keyed(entries) => entries.values().map(String::as_str).collect(),
            Self::Composite(members) => members.iter().flat_map(SecretMember::secret_ids).collect(),
        }
    }
}

impl SecretMember {
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(id) => Ok(Self::Scalar(id.clone())),
            Value::Object(_) => Ok(Self::Keyed(keyed_from_json(value)?)),
            other => Err(SecretsCacheError::InvalidRequest(format!(
                "sequence members must be a string or object, got {}",
                json_kind(other)
            ))),
        }
    }

    pub fn secret_ids(&self) -> Vec<&str> {
        match self {
            Self::Scalar(id) => vec![id.as_str()],
            Self::Keyed(entries) => entries.values().map(String::as_str).collect(),
        }
    }
}

impl TryFrom<Value> for SecretRequest {
    type Error = SecretsCacheError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json(&value)
    }
}

impl From<&str> for SecretRequest {
    fn from(secret_id: &str) -> Self {
        Self::Scalar(secret_id.to_string())
    }
}

impl From<String> for SecretRequest {
    fn from(secret_id: String) -> Self {
        Self::Scalar(secret_id)
    }
}

impl From<IndexMap<String, String>> for SecretRequest {
    fn from(entries: IndexMap<String, String>) -> Self {
        Self::Keyed(entries)
    }
}

impl From<Vec<SecretMember>> for SecretRequest {
    fn from(members: Vec<SecretMember>) -> Self {
        Self::Composite(members)
    }
}

impl From<SecretMember> for SecretRequest {
    fn from(member: SecretMember) -> Self {
        match member {
            SecretMember::Scalar(id) => Self::Scalar(id),
            SecretMember::Keyed(entries) => Self::Keyed(entries),
        }
    }
}

impl From<&str> for SecretMember {
    fn from(secret_id: &str) -> Self {
        Self::Scalar(secret_id.to_string())
    }
}

impl From<String> for SecretMember {
    fn from(secret_id: String) -> Self {
        Self::Scalar(secret_id)
    }
}

impl From<IndexMap<String, String>> for SecretMember {
    fn from(entries: IndexMap<String, String>) -> Self {
        Self::Keyed(entries)
    }
}

impl SecretMember {
    pub fn keyed<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Keyed(keyed_map(entries))
    }
}

fn keyed_map<I, K, V>(entries: I) -> IndexMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(name, id)| (name.into(), id.into()))
        .collect()
}

fn keyed_from_json(value: &Value) -> Result<IndexMap<String, String>> {
    let object = value
        .as_object()
        .ok_or_else(|| SecretsCacheError::InvalidRequest("expected an object".to_string()))?;

    object
        .iter()
        .map(|(name, id)| match id {
            Value::String(id) => Ok((name.clone(), id.clone())),
            other => Err(SecretsCacheError::InvalidRequest(format!(
                "'{name}' must map to a secret id string, got {}",
                json_kind(other)
            ))),
        })
        .collect()
}
