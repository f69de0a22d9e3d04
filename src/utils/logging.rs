//! Logging initialization
//!
//! Wires up a `tracing` subscriber with env-filter support. Components log
//! through the `tracing` macros; this helper is for binaries and tests that
//! want human-readable output.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The `RUST_LOG` environment variable takes precedence over
/// `default_directive`. Calling this more than once is a no-op.
pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
