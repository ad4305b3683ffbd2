//! Shared helpers for integration tests.

use tracing_subscriber::EnvFilter;

/// Route library events to the test harness. Set `RUST_LOG=playground_engine=trace`
/// to see rejected actions.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
