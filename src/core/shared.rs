//! Lock-protected pool handle for callers on more than one thread.
//!
//! The pool itself assumes a single driver. When reservations are made from
//! other threads, wrap it in a [`SharedTimerPool`]: every operation takes the
//! `parking_lot::Mutex` once. Callbacks run while the lock is held and reenter
//! through the `&mut TimerPool` they are given, never through the lock, so a
//! callback must not touch any `SharedTimerPool` clone of its own pool.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::{TimeUnit, TimerCallback, TimerHandle, TimerPool, TimerResult, TimerStats};

/// Cloneable, thread-safe handle to a [`TimerPool`].
#[derive(Debug)]
pub struct SharedTimerPool<U: TimeUnit> {
    inner: Arc<Mutex<TimerPool<U>>>,
}

impl<U: TimeUnit> Clone for SharedTimerPool<U> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<U: TimeUnit> SharedTimerPool<U> {
    /// Take ownership of a pool.
    #[must_use]
    pub fn new(pool: TimerPool<U>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    /// Run `f` with exclusive access to the pool.
    pub fn with<R>(&self, f: impl FnOnce(&mut TimerPool<U>) -> R) -> R {
        let mut pool = self.inner.lock();
        f(&mut pool)
    }

    /// See [`TimerPool::reserve`].
    pub fn reserve(&self) -> TimerResult<TimerHandle> {
        self.inner.lock().reserve()
    }

    /// See [`TimerPool::free`].
    pub fn free(&self, handle: TimerHandle) -> bool {
        self.inner.lock().free(handle)
    }

    /// See [`TimerPool::reserve_and_init`].
    pub fn reserve_and_init(&self, duration: U, callback: TimerCallback<U>) -> TimerResult<TimerHandle> {
        self.inner.lock().reserve_and_init(duration, callback)
    }

    /// See [`TimerPool::start`].
    pub fn start(
        &self,
        handle: TimerHandle,
        duration: Option<U>,
        callback: Option<TimerCallback<U>>,
    ) -> TimerResult<()> {
        self.inner.lock().start(handle, duration, callback)
    }

    /// See [`TimerPool::stop`].
    pub fn stop(&self, handle: TimerHandle, run_callback: bool) -> TimerResult<bool> {
        self.inner.lock().stop(handle, run_callback)
    }

    /// See [`TimerPool::tick`].
    pub fn tick(&self, delta: U) -> usize {
        self.inner.lock().tick(delta)
    }

    /// See [`TimerPool::flush`].
    pub fn flush(&self, stop_execution: bool) {
        self.inner.lock().flush(stop_execution);
    }

    /// See [`TimerPool::stats`].
    pub fn stats(&self) -> TimerStats {
        self.inner.lock().stats()
    }

    /// Recover the pool if this is the last handle.
    pub fn try_unwrap(self) -> Result<TimerPool<U>, Self> {
        Arc::try_unwrap(self.inner)
            .map(|mutex| mutex.into_inner())
            .map_err(|inner| Self { inner })
    }
}
