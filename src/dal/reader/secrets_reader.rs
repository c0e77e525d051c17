use anyhow::Result;

use crate::dal::{fetcher::SecretFetcher, model::secret_value::SecretValue};

/// Reads one secret from the store and decodes its payload.
pub struct SecretsReader<F> {
    fetcher: F,
    debug: bool,
}

impl<F: SecretFetcher> SecretsReader<F> {
    pub fn new(fetcher: F, debug: bool) -> Self {
        Self { fetcher, debug }
    }

    /// Calls the store exactly once. No retries; the store's error is returned
    /// as is.
    pub async fn fetch_raw(&self, secret_id: &str) -> Result<SecretValue> {
        if self.debug {
            tracing::info!(secret_id, "Fetching secret from store");
        }

        let payload = match self.fetcher.get_secret_value(secret_id).await {
            Ok(payload) => payload,
            Err(e) => {
                if self.debug {
                    tracing::info!(secret_id, error = %e, "Secret fetch failed");
                }
                return Err(e);
            }
        };

        let value = SecretValue::from_payload(payload);

        if self.debug {
            match &value {
                SecretValue::Map(map) => {
                    tracing::info!(secret_id, keys = map.len(), "Decoded key-value secret")
                }
                SecretValue::String(_) => {
                    tracing::info!(secret_id, "Secret is a plain string")
                }
            }
        }

        Ok(value)
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
