//! Resolution cache for AWS Secrets Manager values inside Lambda functions.
//!
//! A [`SecretsCacheClient`] fetches each secret identifier at most once for its
//! whole lifetime, whatever shape it is requested in: a single id, a mapping of
//! local names to ids, or a sequence mixing both.
//!
//! ```no_run
//! use lambda_secrets_cache::{SecretRequest, SecretsCacheClient, Transforms};
//!
//! # async fn run() -> lambda_secrets_cache::Result<()> {
//! let client = SecretsCacheClient::from_env().await;
//!
//! let token = client.secret("discord/token", Transforms::None).await?;
//! let creds = client
//!     .secret(
//!         SecretRequest::keyed([("user", "db/user"), ("password", "db/password")]),
//!         Transforms::None,
//!     )
//!     .await?;
//! # let _ = (token, creds);
//! # Ok(())
//! # }
//! ```

pub mod aws;
pub mod bal;
pub mod client;
pub mod config;
pub mod dal;
pub mod error;
pub mod logging;

pub use bal::transform::{Transform, Transforms};
pub use client::SecretsCacheClient;
pub use config::CacheConfig;
pub use dal::fetcher::SecretFetcher;
pub use dal::model::resolved::Resolved;
pub use dal::model::secret_request::{SecretMember, SecretRequest};
pub use dal::model::secret_value::SecretValue;
pub use error::{Result, SecretsCacheError};
