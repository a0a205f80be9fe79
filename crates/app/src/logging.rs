//! Tracing setup for the binary.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "CALIGULA_LOG";
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber. A second call is a no-op.
pub fn init() {
    let filter = build_env_filter();
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
    if installed.is_ok() {
        tracing::debug!("logging initialized");
    }
}

/// `CALIGULA_LOG`, then `RUST_LOG`, then `info`.
fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
