mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lambda_secrets_cache::{CacheConfig, SecretRequest, SecretsCacheClient, Transforms};
use serde_json::json;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use common::MockStore;

struct CountingLayer(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for CountingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target().starts_with("lambda_secrets_cache") {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn store() -> MockStore {
    MockStore::new()
        .with("foo", r#"{"foo":"bar","boo":"baz"}"#)
        .with("mar", "maz")
}

#[tokio::test]
async fn debug_mode_traces_decisions_without_changing_results() {
    let lines = Arc::new(AtomicUsize::new(0));
    let _guard = tracing_subscriber::registry()
        .with(CountingLayer(Arc::clone(&lines)))
        .set_default();
    let request = SecretRequest::composite(["foo", "mar"]);
    let expected = json!([{"foo": "bar", "boo": "baz"}, "maz"]);

    let quiet = SecretsCacheClient::new(store());
    let resolved = quiet.secret(request.clone(), Transforms::None).await.unwrap();
    assert_eq!(resolved.into_value(), expected);
    assert_eq!(lines.load(Ordering::SeqCst), 0);

    let verbose = SecretsCacheClient::with_config(store(), CacheConfig::default().debug(true));
    let resolved = verbose.secret(request, Transforms::None).await.unwrap();
    assert_eq!(resolved.into_value(), expected);
    assert_eq!(verbose.fetcher().calls(), 2);
    // Per identifier: cache miss, fetch, decode outcome, resolved value.
    assert_eq!(lines.load(Ordering::SeqCst), 8);

    lines.store(0, Ordering::SeqCst);
    verbose.secret("mar", Transforms::None).await.unwrap();
    // Cache hit and resolved value.
    assert_eq!(lines.load(Ordering::SeqCst), 2);

    lines.store(0, Ordering::SeqCst);
    let err = verbose.secret("missing", Transforms::None).await.unwrap_err();
    assert_eq!(err.secret_id(), Some("missing"));
    // Cache miss, fetch, failure.
    assert_eq!(lines.load(Ordering::SeqCst), 3);
}
