//! Shared tracing/logging setup for shelfwise binaries.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing with the `info` default level.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_with_default_filter("info");
}

/// Initialize process-wide tracing, using `default` as the filter when
/// `RUST_LOG` is unset.
///
/// JSON lines to stderr, filterable via `RUST_LOG`.
pub fn init_with_default_filter(default: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .with_target(false)
        .try_init();
}
