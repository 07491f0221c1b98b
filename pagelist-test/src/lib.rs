mod db;
mod post;

pub use db::TestDb;
pub use post::{Post, PostFaker};

use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber writing through the test harness.
///
/// Safe to call from every test; only the first call installs it.
/// Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
