//! Diagnostic logging setup.

use tracing::Level;

/// Install the global subscriber.
///
/// Logs go to stderr at `INFO` and above, so stdout carries only the report.
pub fn init() {
    // A second call (e.g. from tests) finds a subscriber already set
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .with_target(false)
        .try_init();
}
