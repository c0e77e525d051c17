use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::dal::model::secret_value::SecretValue;

type TransformFn = dyn Fn(&SecretValue) -> anyhow::Result<Value> + Send + Sync;

/// Derives a value from a raw secret. Applied on every call, never cached.
#[derive(Clone)]
pub struct Transform(Arc<TransformFn>);

impl Transform {
    /// Wraps a fallible transform. An error aborts the `secret` call.
    pub fn try_map<F>(f: F) -> Self
    where
        F: Fn(&SecretValue) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn map<F>(f: F) -> Self
    where
        F: Fn(&SecretValue) -> Value + Send + Sync + 'static,
    {
        Self::try_map(move |value| Ok(f(value)))
    }

    pub fn apply(&self, value: &SecretValue) -> anyhow::Result<Value> {
        (self.0)(value)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}

/// Transforms passed to one `secret` call.
#[derive(Clone, Debug, Default)]
pub enum Transforms {
    #[default]
    None,
    /// Applied to every resolved identifier.
    Uniform(Transform),
    /// Transform `i` applies to member `i` of a composite request only;
    /// members past the end pass through raw.
    Positional(Vec<Transform>),
}

impl Transforms {
    pub fn uniform(transform: Transform) -> Self {
        Self::Uniform(transform)
    }

    pub fn positional(transforms: impl IntoIterator<Item = Transform>) -> Self {
        Self::Positional(transforms.into_iter().collect())
    }

    /// The transform for composite member `index`.
    pub(crate) fn for_member(&self, index: usize) -> Option<&Transform> {
        match self {
            Self::None => None,
            Self::Uniform(transform) => Some(transform),
            Self::Positional(transforms) => transforms.get(index),
        }
    }

    /// The transform for a request that is not a sequence. A positional
    /// sequence treats it as its only member.
    pub(crate) fn for_single(&self) -> Option<&Transform> {
        self.for_member(0)
    }
}

impl From<Transform> for Transforms {
    fn from(transform: Transform) -> Self {
        Self::Uniform(transform)
    }
}

impl From<Vec<Transform>> for Transforms {
    fn from(transforms: Vec<Transform>) -> Self {
        Self::Positional(transforms)
    }
}

impl From<Option<Transform>> for Transforms {
    fn from(transform: Option<Transform>) -> Self {
        transform.map_or(Self::None, Self::Uniform)
    }
}
