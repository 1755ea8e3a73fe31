//! Tracing setup for the `dailyset` binary.
//!
//! Log output goes to stderr so it never mixes with command output on stdout.
//! The filter comes from `RUST_LOG` when set, otherwise [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Returns `false` if one was already set.
pub fn init_logging() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
