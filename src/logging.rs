use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the console sink for debug lines: a `fmt` layer filtered by
/// `RUST_LOG`, defaulting to `info`.
///
/// Does nothing when the host has already installed a global subscriber.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}
