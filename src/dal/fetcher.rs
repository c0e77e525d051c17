use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

/// The external secret store call.
///
/// Returns the payload string stored under `secret_id`. Errors are passed to
/// the caller of `secret` untouched, so implementations should not retry or
/// rewrap them.
#[async_trait]
pub trait SecretFetcher: Send + Sync {
    async fn get_secret_value(&self, secret_id: &str) -> Result<String>;
}

#[async_trait]
impl<F> SecretFetcher for Arc<F>
where
    F: SecretFetcher + ?Sized,
{
    async fn get_secret_value(&self, secret_id: &str) -> Result<String> {
        (**self).get_secret_value(secret_id).await
    }
}

#[async_trait]
impl<'a, F> SecretFetcher for &'a F
where
    F: SecretFetcher + ?Sized,
{
    async fn get_secret_value(&self, secret_id: &str) -> Result<String> {
        (**self).get_secret_value(secret_id).await
    }
}
