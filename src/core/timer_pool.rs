//! Reservation-based countdown timer pool.
//!
//! The pool owns a fixed number of slots allocated once at construction.
//! A caller reserves a slot and keeps its [`TimerHandle`] for as long as the
//! reservation lasts; the slot never moves, so the handle survives any number
//! of start/stop cycles. An external update loop advances every running slot
//! by calling [`TimerPool::tick`] once per time step.
//!
//! Slot lifecycle:
//!
//! ```text
//! Free --reserve--> Reserved --start--> Running --expire/stop--> Reserved
//!   ^                  |                   |                        |
//!   +------free--------+-------free--------+---------free-----------+
//! ```
//!
//! Callbacks run synchronously inside `tick` and `stop` and receive
//! the pool itself, so they may reenter it freely. A panicking callback
//! propagates to the caller; the slot it belonged to has already been marked
//! stopped and the counters stay consistent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::TimerPoolConfig;
use crate::core::{TimeUnit, TimerCallback, TimerError, TimerResult, DEFAULT_EPSILON};

/// Default number of slots in a pool.
pub const DEFAULT_CAPACITY: usize = 16;

/// Stable identifier of a reserved slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerHandle(usize);

impl TimerHandle {
    /// Slot index this handle addresses.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for TimerHandle {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Ownership and activity flags of one slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotState {
    /// Slot is owned by a caller and will not be handed out by `reserve`.
    pub reserved: bool,
    /// Slot is counting down and will be visited by `tick`.
    pub running: bool,
}

#[derive(Debug)]
struct TimerSlot<U: TimeUnit> {
    duration: U,
    remaining: U,
    state: SlotState,
    /// Bumped whenever the reservation ends, so a callback detached during a
    /// fire is never reattached to somebody else's reservation.
    generation: u64,
    /// Pool epoch at the last arm; slots armed during a tick wait for the next.
    armed_epoch: u64,
    callback: Option<TimerCallback<U>>,
}

impl<U: TimeUnit> Default for TimerSlot<U> {
    fn default() -> Self {
        Self {
            duration: U::default(),
            remaining: U::default(),
            state: SlotState::default(),
            generation: 0,
            armed_epoch: 0,
            callback: None,
        }
    }
}

/// Point-in-time statistics about a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerStats {
    /// Number of slots.
    pub capacity: usize,
    /// Slots currently reserved.
    pub reserved: usize,
    /// Slots currently counting down.
    pub running: usize,
    /// Countdowns that reached zero during a tick.
    pub expired_total: u64,
    /// Countdowns ended early by `stop`, `free` or `flush`.
    pub stopped_total: u64,
    /// Calls to `tick`, including ones with nothing to do.
    pub ticks_total: u64,
}

/// Fixed-capacity pool of countdown timers addressed by stable handles.
#[derive(Debug)]
pub struct TimerPool<U: TimeUnit> {
    slots: Box<[TimerSlot<U>]>,
    threshold: U,
    reserved_count: usize,
    running_count: usize,
    epoch: u64,
    expired_total: u64,
    stopped_total: u64,
    ticks_total: u64,
}

/// Pool counting discrete ticks (frames, simulation steps).
pub type TickTimerPool = TimerPool<i64>;

/// Pool counting elapsed seconds.
pub type RealTimerPool = TimerPool<f64>;

impl<U: TimeUnit> Default for TimerPool<U> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<U: TimeUnit> TimerPool<U> {
    /// Create a pool with `capacity` slots and the default epsilon.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_epsilon(capacity, DEFAULT_EPSILON)
    }

    /// Create a pool with `capacity` slots and an explicit zero-crossing epsilon.
    ///
    /// The epsilon only matters for real-valued domains. Unlike
    /// [`TimerPool::with_config`] nothing is validated here: a zero capacity
    /// yields a pool that is always exhausted, and the epsilon must be finite
    /// and non-negative.
    #[must_use]
    pub fn with_epsilon(capacity: usize, epsilon: f64) -> Self {
        debug_assert!(
            epsilon.is_finite() && epsilon >= 0.0,
            "epsilon must be finite and non-negative, got {epsilon}"
        );
        let slots = (0..capacity).map(|_| TimerSlot::default()).collect();
        Self {
            slots,
            threshold: U::threshold(epsilon),
            reserved_count: 0,
            running_count: 0,
            epoch: 0,
            expired_total: 0,
            stopped_total: 0,
            ticks_total: 0,
        }
    }

    /// Create a pool from validated configuration.
    pub fn with_config(config: &TimerPoolConfig) -> TimerResult<Self> {
        config.validate().map_err(TimerError::InvalidConfig)?;
        Ok(Self::with_epsilon(config.capacity, config.epsilon))
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of reserved slots.
    #[must_use]
    pub const fn reserved_count(&self) -> usize {
        self.reserved_count
    }

    /// Number of running slots.
    #[must_use]
    pub const fn running_count(&self) -> usize {
        self.running_count
    }

    /// Zero-crossing threshold in effect.
    #[must_use]
    pub const fn threshold(&self) -> U {
        self.threshold
    }

    /// Whether `handle` addresses a reserved slot.
    #[must_use]
    pub fn is_reserved(&self, handle: TimerHandle) -> bool {
        self.slots.get(handle.0).is_some_and(|slot| slot.state.reserved)
    }

    /// Whether `handle` addresses a running slot.
    #[must_use]
    pub fn is_running(&self, handle: TimerHandle) -> bool {
        self.slots.get(handle.0).is_some_and(|slot| slot.state.running)
    }

    /// Flags of the slot behind `handle`.
    pub fn state(&self, handle: TimerHandle) -> TimerResult<SlotState> {
        self.in_range(handle).map(|index| self.slots[index].state)
    }

    /// Remaining countdown of a reserved slot.
    pub fn remaining(&self, handle: TimerHandle) -> TimerResult<U> {
        self.checked(handle).map(|index| self.slots[index].remaining)
    }

    /// Configured duration of a reserved slot.
    pub fn duration(&self, handle: TimerHandle) -> TimerResult<U> {
        self.checked(handle).map(|index| self.slots[index].duration)
    }

    /// Snapshot of counters.
    #[must_use]
    pub fn stats(&self) -> TimerStats {
        TimerStats {
            capacity: self.capacity(),
            reserved: self.reserved_count,
            running: self.running_count,
            expired_total: self.expired_total,
            stopped_total: self.stopped_total,
            ticks_total: self.ticks_total,
        }
    }

    /// Reserve the lowest-index free slot.
    ///
    /// Duration, remaining time and callback of the slot are left as they are.
    pub fn reserve(&mut self) -> TimerResult<TimerHandle> {
        let capacity = self.capacity();
        let exhausted = TimerError::CapacityExhausted { capacity };
        if self.reserved_count >= capacity {
            tracing::warn!("timer pool exhausted ({} slots reserved)", capacity);
            return Err(exhausted);
        }

        let index = self
            .slots
            .iter()
            .position(|slot| !slot.state.reserved)
            .ok_or(exhausted)?;
        self.slots[index].state.reserved = true;
        self.reserved_count += 1;
        tracing::debug!("reserved timer#{} ({}/{})", index, self.reserved_count, capacity);
        Ok(TimerHandle(index))
    }

    /// Release a reservation.
    ///
    /// A running slot is stopped first without firing its callback. Out-of-range
    /// or unreserved handles are ignored; the return value tells whether
    /// anything was released.
    pub fn free(&mut self, handle: TimerHandle) -> bool {
        if !self.is_reserved(handle) {
            tracing::debug!("ignoring free of unreserved {}", handle);
            return false;
        }
        self.release(handle.0);
        tracing::debug!("freed {} ({} reserved)", handle, self.reserved_count);
        true
    }

    /// Configure duration and callback without arming the countdown.
    pub fn init(&mut self, handle: TimerHandle, duration: U, callback: TimerCallback<U>) -> TimerResult<()> {
        let index = self.checked(handle)?;
        let slot = &mut self.slots[index];
        slot.duration = duration;
        slot.callback = Some(callback);
        Ok(())
    }

    /// Reserve a slot and configure it in one step.
    ///
    /// Nothing is written when no slot is available.
    pub fn reserve_and_init(&mut self, duration: U, callback: TimerCallback<U>) -> TimerResult<TimerHandle> {
        let handle = self.reserve()?;
        self.init(handle, duration, callback)?;
        Ok(handle)
    }

    /// Arm a reserved slot.
    ///
    /// A supplied `duration` replaces the configured one; either way the
    /// countdown restarts from the configured duration. A supplied `callback`
    /// replaces the registered one. Starting a slot that is already running
    /// only rearms it.
    pub fn start(
        &mut self,
        handle: TimerHandle,
        duration: Option<U>,
        callback: Option<TimerCallback<U>>,
    ) -> TimerResult<()> {
        let index = self.checked(handle)?;
        let epoch = self.epoch;
        let slot = &mut self.slots[index];
        if let Some(duration) = duration {
            slot.duration = duration;
        }
        slot.remaining = slot.duration;
        if let Some(callback) = callback {
            slot.callback = Some(callback);
        }
        slot.armed_epoch = epoch;

        let was_running = slot.state.running;
        let remaining = slot.remaining;
        if !was_running {
            slot.state.running = true;
            self.running_count += 1;
        }
        tracing::debug!("started {} with {} remaining (restart: {})", handle, remaining, was_running);
        Ok(())
    }

    /// Halt a running slot.
    ///
    /// With `run_callback` the slot is force-completed and its callback fires
    /// once; without it the countdown is cancelled silently. Stopping a slot
    /// that is not running does nothing, and the return value is `false`.
    pub fn stop(&mut self, handle: TimerHandle, run_callback: bool) -> TimerResult<bool> {
        let index = self.checked(handle)?;
        if !self.slots[index].state.running {
            return Ok(false);
        }

        self.halt(index);
        tracing::debug!("stopped {} (callback: {})", handle, run_callback);
        if run_callback {
            self.fire(index);
        }
        Ok(true)
    }

    /// Release every reservation.
    ///
    /// Release every reservation. No callback fires.
    ///
    /// Running slots are always stopped, whatever `stop_execution` says:
    /// keeping an unreserved slot counting down is not supported, so both
    /// values leave no slot reserved or running.
    pub fn flush(&mut self, stop_execution: bool) {
        let released = self.reserved_count;
        let stopped = self.running_count;
        for index in 0..self.slots.len() {
            if self.slots[index].state.reserved {
                self.release(index);
            }
        }
        debug_assert_eq!(self.reserved_count, 0);
        debug_assert_eq!(self.running_count, 0);
        tracing::debug!(
            "flushed {} reserved timers, {} stopped (stop_execution: {})",
            released,
            stopped,
            stop_execution
        );
    }

    /// Advance every running slot by `delta` and fire the ones that expire.
    ///
    /// Slots are visited in index order. The number of slots visited is capped
    /// by the running count at entry, and slots armed by a callback during
    /// this call are left for the next tick, so callbacks may reenter the pool
    /// without disturbing the scan. Returns the number of expirations.
    pub fn tick(&mut self, delta: U) -> usize {
        self.ticks_total += 1;
        if self.running_count == 0 {
            return 0;
        }

        self.epoch += 1;
        let epoch = self.epoch;
        let threshold = self.threshold;
        let mut budget = self.running_count;
        let mut expired = 0;

        for index in 0..self.slots.len() {
            if budget == 0 {
                break;
            }
            let slot = &mut self.slots[index];
            if !slot.state.running || slot.armed_epoch >= epoch {
                continue;
            }
            budget -= 1;

            slot.remaining = slot.remaining.count_down(delta);
            if !U::is_expired(slot.remaining, threshold) {
                continue;
            }

            slot.state.running = false;
            tracing::trace!("timer#{} expired ({} remaining)", index, slot.remaining);
            self.running_count -= 1;
            self.expired_total += 1;
            expired += 1;
            self.fire(index);
        }

        expired
    }

    fn in_range(&self, handle: TimerHandle) -> TimerResult<usize> {
        if handle.0 < self.slots.len() {
            Ok(handle.0)
        } else {
            tracing::warn!("rejecting out-of-range {}", handle);
            Err(TimerError::InvalidHandle {
                index: handle.0,
                capacity: self.slots.len(),
            })
        }
    }

    fn checked(&self, handle: TimerHandle) -> TimerResult<usize> {
        let index = self.in_range(handle)?;
        if self.slots[index].state.reserved {
            Ok(index)
        } else {
            tracing::warn!("rejecting unreserved {}", handle);
            Err(TimerError::NotReserved(index))
        }
    }

    fn halt(&mut self, index: usize) {
        self.slots[index].state.running = false;
        self.running_count -= 1;
        self.stopped_total += 1;
    }

    fn release(&mut self, index: usize) {
        if self.slots[index].state.running {
            self.halt(index);
        }
        let slot = &mut self.slots[index];
        slot.state.reserved = false;
        slot.generation = slot.generation.wrapping_add(1);
        slot.callback = None;
        self.reserved_count -= 1;
    }

    /// Invoke the slot's callback with the callback detached from the slot.
    fn fire(&mut self, index: usize) {
        let generation = self.slots[index].generation;
        let Some(mut callback) = self.slots[index].callback.take() else {
            return;
        };

        callback.invoke(self, TimerHandle(index));

        let slot = &mut self.slots[index];
        if slot.generation == generation && slot.callback.is_none() {
            slot.callback = Some(callback);
        }
    }
}
