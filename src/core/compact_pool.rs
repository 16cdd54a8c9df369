//! Swap-compaction countdown pool.
//!
//! A lighter alternative to [`TimerPool`](crate::core::TimerPool) for
//! fire-and-forget countdowns: active entries occupy a dense prefix, and an
//! entry that expires or is stopped is replaced by the last active one. That
//! makes removal O(1) and keeps `tick` cache friendly, at the cost of stable
//! identifiers; the position returned by `start` is only valid until the next
//! removal.

use crate::core::{TimeUnit, TimerError, TimerResult, DEFAULT_EPSILON};

type Action = Box<dyn FnMut() + Send>;

struct CompactEntry<U> {
    duration: U,
    remaining: U,
    action: Action,
}

/// Dense pool of one-shot countdowns.
pub struct CompactTimerPool<U: TimeUnit> {
    entries: Vec<CompactEntry<U>>,
    capacity: usize,
    threshold: U,
}

impl<U: TimeUnit> std::fmt::Debug for CompactTimerPool<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompactTimerPool")
            .field("active", &self.entries.len())
            .field("capacity", &self.capacity)
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl<U: TimeUnit> CompactTimerPool<U> {
    /// Create a pool holding at most `capacity` active countdowns.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_epsilon(capacity, DEFAULT_EPSILON)
    }

    /// Create a pool with an explicit zero-crossing epsilon.
    #[must_use]
    pub fn with_epsilon(capacity: usize, epsilon: f64) -> Self {
        debug_assert!(
            epsilon.is_finite() && epsilon >= 0.0,
            "epsilon must be finite and non-negative, got {epsilon}"
        );
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            threshold: U::threshold(epsilon),
        }
    }

    /// Maximum number of active countdowns.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of active countdowns.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    /// Remaining time of the entry at `position`.
    #[must_use]
    pub fn remaining(&self, position: usize) -> Option<U> {
        self.entries.get(position).map(|entry| entry.remaining)
    }

    /// Duration the entry at `position` was started with.
    #[must_use]
    pub fn duration(&self, position: usize) -> Option<U> {
        self.entries.get(position).map(|entry| entry.duration)
    }

    /// Begin a countdown and return its current position.
    pub fn start<F>(&mut self, duration: U, action: F) -> TimerResult<usize>
    where
        F: FnMut() + Send + 'static,
    {
        if self.entries.len() >= self.capacity {
            tracing::warn!("compact timer pool exhausted ({} active)", self.capacity);
            return Err(TimerError::CapacityExhausted {
                capacity: self.capacity,
            });
        }
        if U::is_expired(duration, self.threshold) {
            return Err(TimerError::InvalidDuration(format!(
                "{duration} does not exceed the expiry threshold {}",
                self.threshold
            )));
        }

        self.entries.push(CompactEntry {
            duration,
            remaining: duration,
            action: Box::new(action),
        });
        Ok(self.entries.len() - 1)
    }

    /// Remove the entry at `position`, optionally running its action.
    ///
    /// Returns `false` when nothing is active at that position.
    pub fn stop(&mut self, position: usize, run_callback: bool) -> bool {
        if position >= self.entries.len() {
            return false;
        }
        let mut entry = self.entries.swap_remove(position);
        if run_callback {
            (entry.action)();
        }
        true
    }

    /// Advance every active countdown by `delta`, running and removing the
    /// ones that expire. Returns the number of expirations.
    pub fn tick(&mut self, delta: U) -> usize {
        if self.entries.is_empty() || U::is_negligible(delta, self.threshold) {
            return 0;
        }

        let mut expired = 0;
        let mut index = 0;
        while index < self.entries.len() {
            let entry = &mut self.entries[index];
            entry.remaining = entry.remaining.count_down(delta);
            if U::is_expired(entry.remaining, self.threshold) {
                // The swapped-in entry is visited next at the same index.
                let mut done = self.entries.swap_remove(index);
                (done.action)();
                expired += 1;
            } else {
                index += 1;
            }
        }
        expired
    }

    /// Drop every active countdown without running any action.
    pub fn clear(&mut self) {
        tracing::debug!("cleared {} compact timers", self.entries.len());
        self.entries.clear();
    }
}
