//! Logging setup
//!
//! Installs a `tracing` subscriber. `RUST_LOG` takes precedence over the
//! configured level.

use crate::config::LoggingConfig;
use crate::utils::error::{PolicyError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, falling back to `level`
pub fn env_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| PolicyError::config(format!("Invalid log level '{}': {}", level, e)))
}

/// Initialize the global subscriber. Logs go to stderr so stdout stays
/// reserved for documents.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.level)?)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| PolicyError::config(format!("Failed to initialize logging: {}", e)))
}
