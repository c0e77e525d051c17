#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use anyhow::{bail, Result};
use async_trait::async_trait;
use lambda_secrets_cache::SecretFetcher;
use parking_lot::Mutex;

/// In-memory secret store that records every fetch.
#[derive(Default)]
pub struct MockStore {
    payloads: HashMap<String, String>,
    fail_once: Mutex<HashSet<String>>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, secret_id: &str, payload: &str) -> Self {
        self.payloads.insert(secret_id.to_string(), payload.to_string());
        self
    }

    /// The next fetch of `secret_id` fails; later ones succeed.
    pub fn failing_once(self, secret_id: &str) -> Self {
        self.fail_once.lock().insert(secret_id.to_string());
        self
    }

    /// Every fetch suspends for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn calls_for(&self, secret_id: &str) -> usize {
        self.calls.lock().iter().filter(|id| *id == secret_id).count()
    }
}

#[async_trait]
impl SecretFetcher for MockStore {
    async fn get_secret_value(&self, secret_id: &str) -> Result<String> {
        self.calls.lock().push(secret_id.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_once.lock().remove(secret_id) {
            bail!("ThrottlingException: rate exceeded for {secret_id}");
        }

        match self.payloads.get(secret_id) {
            Some(payload) => Ok(payload.clone()),
            None => bail!("ResourceNotFoundException: {secret_id}"),
        }
    }
}
