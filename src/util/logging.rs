//! `tracing` subscriber setup for the command-line tool.

use std::sync::OnceLock;

use crate::constants;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the stderr `tracing` subscriber.
///
/// `MKPATH_LOG` wins over `fallback` (usually `log.level` from the config).
pub fn init(fallback: Option<&str>) {
    INIT.get_or_init(|| {
        let filter = match EnvFilter::try_from_env(constants::LOG_ENV) {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(fallback.unwrap_or(constants::DEFAULT_LOG_LEVEL))
                .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_LEVEL)),
        };
        let subscriber = Registry::default().with(filter).with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        );
        // Fails only when a subscriber is already installed (tests, embedding callers).
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
