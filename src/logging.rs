//! Tracing setup shared by the binary and tests

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from a level string.
///
/// Falls back to `info` when the string is not a valid filter directive.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
