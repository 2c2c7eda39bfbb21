use tracing_subscriber::EnvFilter;

use super::config;

/// Installs the global `tracing` subscriber for the binaries.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config::log_filter()))
        .with_target(false)
        .init();
}
