//! Structured logging setup for pool diagnostics.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or cannot be parsed.
pub const DEFAULT_LOG_DIRECTIVE: &str = "countdown_pool=info";

/// Filter installed by [`init_tracing`]: `RUST_LOG` when it parses, otherwise
/// [`DEFAULT_LOG_DIRECTIVE`].
#[must_use]
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

/// Install a `fmt` subscriber for the pool's events unless the application
/// already set one.
///
/// Events use the `countdown_pool` target: `debug` shows reservations,
/// flushes and stops, `trace` adds every expiry, and capacity rejections are
/// logged at `warn`.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt().with_env_filter(log_filter()).try_init();
}
