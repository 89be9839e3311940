//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber filtered by `log_level`, falling back
/// to `info` when the directive does not parse.
pub fn init_tracing(log_level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
}
