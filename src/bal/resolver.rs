use futures::future::try_join_all;
use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    bal::{
        cache::SecretCache,
        transform::{Transform, Transforms},
    },
    dal::{
        fetcher::SecretFetcher,
        model::{
            json_kind,
            resolved::Resolved,
            secret_request::{SecretMember, SecretRequest},
            secret_value::SecretValue,
        },
        reader::secrets_reader::SecretsReader,
    },
    error::{Result, SecretsCacheError},
};

/// Walks a request shape, serving identifiers from the cache and fetching
/// only on a miss.
pub struct SecretResolver<F> {
    reader: SecretsReader<F>,
    cache: SecretCache,
    debug: bool,
}

impl<F: SecretFetcher> SecretResolver<F> {
    pub fn new(fetcher: F, debug: bool) -> Self {
        Self {
            reader: SecretsReader::new(fetcher, debug),
            cache: SecretCache::new(),
            debug,
        }
    }

    /// Resolves `request` into a result of the same shape. The first failure
    /// at any depth fails the whole call.
    pub async fn resolve(
        &self,
        request: &SecretRequest,
        transforms: &Transforms,
    ) -> Result<Resolved> {
        match request {
            SecretRequest::Scalar(secret_id) => self
                .resolve_scalar(secret_id, transforms.for_single())
                .await
                .map(Resolved::Value),
            SecretRequest::Keyed(entries) => self
                .resolve_keyed(entries, transforms.for_single())
                .await
                .map(Resolved::Keyed),
            SecretRequest::Composite(members) => {
                let resolved = try_join_all(members.iter().enumerate().map(|(index, member)| {
                    self.resolve_member(member, transforms.for_member(index))
                }))
                .await?;

                Ok(Resolved::Composite(resolved))
            }
        }
    }

    async fn resolve_member(
        &self,
        member: &SecretMember,
        transform: Option<&Transform>,
    ) -> Result<Resolved> {
        match member {
            SecretMember::Scalar(secret_id) => self
                .resolve_scalar(secret_id, transform)
                .await
                .map(Resolved::Value),
            SecretMember::Keyed(entries) => self
                .resolve_keyed(entries, transform)
                .await
                .map(Resolved::Keyed),
        }
    }

    async fn resolve_keyed(
        &self,
        entries: &IndexMap<String, String>,
        transform: Option<&Transform>,
    ) -> Result<IndexMap<String, Value>> {
        let values = try_join_all(
            entries
                .values()
                .map(|secret_id| self.resolve_scalar(secret_id, transform)),
        )
        .await?;

        Ok(entries.keys().cloned().zip(values).collect())
    }

    async fn resolve_scalar(
        &self,
        secret_id: &str,
        transform: Option<&Transform>,
    ) -> Result<Value> {
        let raw = self.raw_value(secret_id).await?;

        let value = match transform {
            Some(transform) => {
                transform
                    .apply(&raw)
                    .map_err(|source| SecretsCacheError::Transform {
                        secret_id: secret_id.to_string(),
                        source,
                    })?
            }
            None => raw.into(),
        };

        if self.debug {
            tracing::info!(
                secret_id,
                kind = json_kind(&value),
                transformed = transform.is_some(),
                "Resolved secret"
            );
        }

        Ok(value)
    }

    /// The cached raw value for `secret_id`, fetching it on first use.
    /// Concurrent first requests share a single fetch.
    async fn raw_value(&self, secret_id: &str) -> Result<SecretValue> {
        let slot = self.cache.slot(secret_id);

        if let Some(value) = slot.get() {
            if self.debug {
                tracing::info!(secret_id, kind = value.kind(), "Cache hit");
            }
            return Ok(value.clone());
        }

        if self.debug {
            tracing::info!(secret_id, "Cache miss");
        }

        match slot
            .get_or_try_init(|| self.reader.fetch_raw(secret_id))
            .await
        {
            Ok(value) => Ok(value.clone()),
            Err(source) => {
                self.cache.release_unfilled(secret_id, &slot);
                Err(SecretsCacheError::Fetch {
                    secret_id: secret_id.to_string(),
                    source,
                })
            }
        }
    }

    pub fn cache(&self) -> &SecretCache {
        &self.cache
    }

    pub fn reader(&self) -> &SecretsReader<F> {
        &self.reader
    }
}
