//! Completion callbacks attached to pool slots.

use std::fmt;

use crate::core::{TimeUnit, TimerHandle, TimerPool};

type BoxedCallback<U> = Box<dyn FnMut(&mut TimerPool<U>, TimerHandle) + Send>;

/// Action invoked when a slot expires or is force-completed.
///
/// The pool hands itself back to the callback, so a callback may restart its
/// own slot, stop or free other slots, or reserve new ones while the pool is
/// in the middle of a tick.
pub struct TimerCallback<U: TimeUnit> {
    inner: BoxedCallback<U>,
}

impl<U: TimeUnit> TimerCallback<U> {
    /// Wrap a callback that receives the pool and the finishing handle.
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(&mut TimerPool<U>, TimerHandle) + Send + 'static,
    {
        Self { inner: Box::new(f) }
    }

    /// Wrap a zero-argument action that does not need the pool.
    pub fn action<F>(mut f: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self::new(move |_, _| f())
    }

    pub(crate) fn invoke(&mut self, pool: &mut TimerPool<U>, handle: TimerHandle) {
        (self.inner)(pool, handle);
    }
}

impl<U: TimeUnit> fmt::Debug for TimerCallback<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TimerCallback")
    }
}
