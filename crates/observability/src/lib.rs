//! Tracing/logging setup shared by binaries.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing.
///
/// Safe to call multiple times; subsequent calls are no-ops. Verbosity is
/// controlled through `RUST_LOG`, defaulting to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Compact console lines; this workspace's only binary is a demo, not a
    // service, so structured JSON would just be noise.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
