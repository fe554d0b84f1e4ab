//! Tracing setup for the command-line binary.
//!
//! Logs go to stderr so JSON and CSV output on stdout stay machine-readable.

use tracing_subscriber::EnvFilter;

/// Default filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Build the filter: an explicit directive wins over `RUST_LOG`.
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(d) => EnvFilter::try_new(d).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    }
}

/// Install a compact fmt subscriber.
///
/// Returns `false` if a global subscriber was already set.
pub fn init_tracing(directive: Option<&str>) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
