//! Tracing subscriber setup.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::container::LoggingConfig;

/// Filter used when the configured directive does not parse.
pub const FALLBACK_LEVEL: &str = "info";

/// Build the filter for `config`, falling back to `info`.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true)
        .with_thread_ids(config.thread_ids)
        .try_init()
        .map_err(|e| anyhow!(e))
}
