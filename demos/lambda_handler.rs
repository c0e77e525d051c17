//! A Lambda function holding one secrets cache for its execution environment.
//!
//! Secrets are fetched on the first invocation that needs them and served from
//! memory afterwards. Set `SECRETS_CACHE_DEBUG=1` to trace cache decisions.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use lambda_secrets_cache::{SecretRequest, SecretsCacheClient, Transform, Transforms};
use serde_json::{json, Value};

async fn function_handler(
    secrets: &SecretsCacheClient,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    tracing::info!("Lambda invoked");

    let public_key_secret_arn = std::env::var("DISCORD_PUBLIC_KEY_SECRET_ARN")?;
    let token_secret_arn = std::env::var("DISCORD_TOKEN_SECRET_ARN")?;

    let resolved = secrets
        .secret(
            SecretRequest::composite([public_key_secret_arn, token_secret_arn]),
            vec![
                Transform::map(|value| json!(value.get("key"))),
                Transform::map(|value| json!(value.get("token"))),
            ],
        )
        .await?;

    let loaded = resolved
        .as_composite()
        .map(|members| members.iter().filter(|m| m.as_str().is_some()).count())
        .unwrap_or_default();

    // Extra secrets to warm, described as JSON in the event.
    let requested = match event.payload.get("secrets") {
        Some(request) => {
            let request = SecretRequest::from_json(request)?;
            let count = request.secret_ids().len();
            secrets.secret(request, Transforms::None).await?;
            count
        }
        None => 0,
    };

    Ok(json!({
        "loaded": loaded,
        "cached": secrets.cached_len(),
        "requested": requested,
    }))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_secrets_cache::logging::init();

    let secrets = SecretsCacheClient::from_env().await;
    let secrets = &secrets;

    run(service_fn(move |event| async move {
        function_handler(secrets, event).await
    }))
    .await
}
