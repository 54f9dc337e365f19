//! Test logging setup.
//!
//! Unit tests (via the ctor hook in the backend crate) and integration
//! tests both call [`init`]; whichever runs first installs the subscriber
//! and the rest are no-ops.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install the test tracing subscriber, at most once per process.
///
/// Verbosity comes from `TEST_LOG` when set, then `RUST_LOG`, and defaults
/// to `warn` so passing runs stay quiet. Output goes through the test
/// writer so cargo and nextest capture it per test, with timestamps
/// suppressed to keep failure output diffable.
pub fn init() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another harness may have installed a subscriber already; that is
        // fine, ours just loses the race.
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
