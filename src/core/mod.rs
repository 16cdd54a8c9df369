//! Countdown timer pools and the types they share.

pub mod callback;
pub mod compact_pool;
pub mod domain;
pub mod error;
pub mod shared;
pub mod timer_pool;

pub use callback::TimerCallback;
pub use compact_pool::CompactTimerPool;
pub use domain::{TimeUnit, DEFAULT_EPSILON};
pub use error::{AppResult, TimerError, TimerResult};
pub use shared::SharedTimerPool;
pub use timer_pool::{
    RealTimerPool, SlotState, TickTimerPool, TimerHandle, TimerPool, TimerStats, DEFAULT_CAPACITY,
};
