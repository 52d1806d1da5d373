//! Tracing setup for binaries embedding the client core.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "blui_client_core=info";

/// Build the filter from `RUST_LOG`, falling back to `default_filter`.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install a stderr fmt subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
