//! Log capture for the backend's test binaries.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Variable that overrides the test log filter, e.g.
/// `GALLERY_TEST_LOG=gallery_backend=debug cargo test`.
pub const TEST_LOG_VAR: &str = "GALLERY_TEST_LOG";

/// Quiet by default; security warnings from the gates still show up.
pub const DEFAULT_TEST_FILTER: &str = "error,gallery_backend=warn";

static INSTALLED: OnceCell<()> = OnceCell::new();

fn filter() -> EnvFilter {
    std::env::var(TEST_LOG_VAR)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_TEST_FILTER))
}

/// Install a plain-text subscriber that writes through the test harness.
///
/// Safe to call from every test binary and from unit tests; only the first
/// call installs anything.
pub fn init() {
    INSTALLED.get_or_init(|| {
        // try_init: another subscriber may already be global in this process
        let _ = fmt()
            .with_env_filter(filter())
            .with_test_writer()
            .without_time()
            .with_target(true)
            .try_init();
    });
}
