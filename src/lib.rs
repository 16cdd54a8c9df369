//! # Countdown Pool
//!
//! A fixed-capacity countdown timer scheduler driven by an external update loop.
//!
//! Callers reserve a slot in the pool, arm it with a duration, and the pool
//! counts every armed slot down once per [`tick`](core::TimerPool::tick),
//! invoking the slot's completion callback exactly once when its time runs
//! out. Durations are either discrete ticks (frames, simulation steps) or
//! elapsed seconds; both share one implementation parametrized by
//! [`TimeUnit`](core::TimeUnit).
//!
//! ## Key Features
//!
//! - **Stable handles**: slots never move, so a handle stays valid for the
//!   whole reservation across any number of start/stop cycles
//! - **No allocation after construction**: all slots are created up front
//! - **Reentrant callbacks**: a callback receives the pool and may restart,
//!   stop, free or reserve timers while a tick is in progress
//! - **Swap-compaction mode**: [`CompactTimerPool`](core::CompactTimerPool)
//!   for fire-and-forget countdowns that never need a stable handle
//! - **Optional locking**: [`SharedTimerPool`](core::SharedTimerPool) for
//!   reservations made from several threads
//!
//! ## Example
//!
//! ```
//! use countdown_pool::core::{TickTimerPool, TimerCallback};
//!
//! let mut pool = TickTimerPool::new(4);
//! let blink = pool.reserve().unwrap();
//!
//! // Restart itself every three frames.
//! let callback = TimerCallback::new(|pool: &mut TickTimerPool, handle| {
//!     pool.start(handle, None, None).unwrap();
//! });
//! pool.start(blink, Some(3), Some(callback)).unwrap();
//!
//! for _ in 0..9 {
//!     pool.tick(1);
//! }
//! assert!(pool.is_running(blink));
//! assert_eq!(pool.stats().expired_total, 3);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Timer pools, handles, callbacks and errors.
pub mod core;
/// Configuration models for pools.
pub mod config;
/// Builders to construct pools from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;
