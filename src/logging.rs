//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() -> bool {
    init_tracing_with("info")
}

/// Install a `fmt` subscriber, falling back to `default_directive` when
/// `RUST_LOG` is unset or unparsable.
///
/// Returns false if a global subscriber was already installed.
pub fn init_tracing_with(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
