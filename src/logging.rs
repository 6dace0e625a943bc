//! Tracing subscriber setup for the binary.
//!
//! Logs go to stderr so stdout stays clean for reports and JSON.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. A second call (or a bad directive) is not fatal.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
