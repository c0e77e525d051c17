use serde::de::DeserializeOwned;

use crate::{
    aws::secrets::SecretsManager,
    bal::{resolver::SecretResolver, transform::Transforms},
    config::CacheConfig,
    dal::{
        fetcher::SecretFetcher,
        model::{resolved::Resolved, secret_request::SecretRequest},
    },
    error::Result,
};

/// Per-instance secret cache. Create one per Lambda execution environment
/// and reuse it across invocations; each identifier is fetched once for the
/// client's lifetime.
pub struct SecretsCacheClient<F = SecretsManager> {
    resolver: SecretResolver<F>,
    config: CacheConfig,
}

impl SecretsCacheClient<SecretsManager> {
    /// Secrets Manager client from the ambient AWS configuration, with
    /// options read by [`CacheConfig::from_env`].
    pub async fn from_env() -> Self {
        Self::with_config(SecretsManager::from_env().await, CacheConfig::from_env())
    }
}

impl<F: SecretFetcher> SecretsCacheClient<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_config(fetcher, CacheConfig::default())
    }

    pub fn with_config(fetcher: F, config: CacheConfig) -> Self {
        Self {
            resolver: SecretResolver::new(fetcher, config.debug),
            config,
        }
    }

    /// Resolves `request`, returning a result of the same shape.
    ///
    /// `transforms` is [`Transforms::None`], a single [`Transform`] applied to
    /// every identifier, or a `Vec<Transform>` applied by position to the
    /// members of a composite request.
    ///
    /// [`Transform`]: crate::Transform
    pub async fn secret(
        &self,
        request: impl Into<SecretRequest>,
        transforms: impl Into<Transforms>,
    ) -> Result<Resolved> {
        self.resolver
            .resolve(&request.into(), &transforms.into())
            .await
    }

    /// Like [`secret`](Self::secret), deserialising the JSON rendering of the
    /// result into `T`.
    pub async fn secret_as<T: DeserializeOwned>(
        &self,
        request: impl Into<SecretRequest>,
        transforms: impl Into<Transforms>,
    ) -> Result<T> {
        self.secret(request, transforms).await?.deserialize()
    }

    pub fn is_cached(&self, secret_id: &str) -> bool {
        self.resolver.cache().contains(secret_id)
    }

    pub fn cached_len(&self) -> usize {
        self.resolver.cache().len()
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    pub fn fetcher(&self) -> &F {
        self.resolver.reader().fetcher()
    }
}
