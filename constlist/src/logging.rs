//! Diagnostic logging through `tracing`.
//!
//! Events go to stderr so generated code on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives, e.g.
/// `CONSTLIST_LOG=constlist_codegen=debug`.
pub const LOG_ENV: &str = "CONSTLIST_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Initializes the global tracing subscriber.
///
/// This should be called *once* at the beginning of the program.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .init();
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
