//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Setup logging for the console session.
///
/// Honors `RUST_LOG`; defaults to `warn` so log lines do not interleave with the menu.
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}
