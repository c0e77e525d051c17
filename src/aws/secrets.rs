use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_secretsmanager::Client;

use crate::dal::fetcher::SecretFetcher;

/// AWS Secrets Manager as the backing store. Request failures come back as
/// the SDK's `SdkError`, without added context.
#[derive(Clone)]
pub struct SecretsManager {
    client: Client,
}

impl SecretsManager {
    pub fn new_with_client(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the ambient AWS configuration of the function.
    pub async fn from_env() -> Self {
        let config = aws_config::load_from_env().await;
        Self::new_with_client(Client::new(&config))
    }
}

#[async_trait]
impl SecretFetcher for SecretsManager {
    async fn get_secret_value(&self, secret_id: &str) -> Result<String> {
        let resp = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await?;

        resp.secret_string()
            .map(str::to_owned)
            .context("Secret value is missing or not a string")
    }
}
