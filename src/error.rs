/// Errors surfaced by [`SecretsCacheClient::secret`](crate::SecretsCacheClient::secret).
#[derive(Debug, thiserror::Error)]
pub enum SecretsCacheError {
    /// The secret store call failed. `source` is the store's error, untouched.
    #[error("failed to fetch secret '{secret_id}'")]
    Fetch {
        secret_id: String,
        #[source]
        source: anyhow::Error,
    },
    /// A caller supplied transform failed. The raw value stays cached.
    #[error("transform failed for secret '{secret_id}'")]
    Transform {
        secret_id: String,
        #[source]
        source: anyhow::Error,
    },
    /// A JSON request description does not map onto a request shape.
    #[error("invalid secret request: {0}")]
    InvalidRequest(String),
    /// A resolved shape could not be deserialised into the requested type.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SecretsCacheError {
    /// Identifier the failure relates to, when there is one.
    pub fn secret_id(&self) -> Option<&str> {
        match self {
            Self::Fetch { secret_id, .. } | Self::Transform { secret_id, .. } => {
                Some(secret_id.as_str())
            }
            Self::InvalidRequest(_) | Self::Json(_) => None,
        }
    }
}

pub type Result<T, E = SecretsCacheError> = std::result::Result<T, E>;
