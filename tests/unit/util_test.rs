//! Tests for utility functions

use countdown_pool::core::TickTimerPool;
use countdown_pool::util::{init_tracing, log_filter, DEFAULT_LOG_DIRECTIVE};

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    assert!(tracing::dispatcher::has_been_set());

    // Pool operations log through the installed subscriber.
    let mut pool = TickTimerPool::new(1);
    let handle = pool.reserve().unwrap();
    pool.start(handle, Some(1), None).unwrap();
    assert_eq!(pool.tick(1), 1);
}

#[test]
fn test_log_filter_defaults_to_crate_target() {
    if std::env::var_os("RUST_LOG").is_none() {
        assert_eq!(log_filter().to_string(), DEFAULT_LOG_DIRECTIVE);
    }
}
