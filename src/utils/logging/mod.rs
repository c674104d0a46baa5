//! Logging setup
//!
//! The crate logs through `tracing`; embedders may install their own
//! subscriber or call [`init_logging`].

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins, otherwise the configured level.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install a global fmt subscriber.
///
/// Returns false when a global subscriber was already set, which is not an
/// error: tests and embedders commonly install their own first.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!("Logging initialized at level {}", config.level);
    }
    installed
}
