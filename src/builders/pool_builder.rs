//! Builder for timer pools.

use crate::config::TimerPoolConfig;
use crate::core::{
    AppResult, CompactTimerPool, SharedTimerPool, TimeUnit, TimerError, TimerPool, TimerResult,
};

/// Assembles pools of any flavor from one validated configuration.
#[derive(Debug, Clone, Default)]
pub struct TimerPoolBuilder {
    config: TimerPoolConfig,
}

impl TimerPoolBuilder {
    /// Start from the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    #[must_use]
    pub const fn from_config(config: TimerPoolConfig) -> Self {
        Self { config }
    }

    /// Start from the process environment (see [`TimerPoolConfig::from_env`]).
    pub fn from_env() -> AppResult<Self> {
        TimerPoolConfig::from_env().map(Self::from_config)
    }

    /// Set the number of slots.
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the zero-crossing epsilon for real-valued pools.
    #[must_use]
    pub const fn epsilon(mut self, epsilon: f64) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    /// Configuration the builder will apply.
    #[must_use]
    pub const fn config(&self) -> &TimerPoolConfig {
        &self.config
    }

    /// Build a reservation pool.
    pub fn build<U: TimeUnit>(&self) -> TimerResult<TimerPool<U>> {
        TimerPool::with_config(&self.config)
    }

    /// Build a reservation pool behind a lock.
    pub fn build_shared<U: TimeUnit>(&self) -> TimerResult<SharedTimerPool<U>> {
        self.build().map(SharedTimerPool::new)
    }

    /// Build a swap-compaction pool.
    pub fn build_compact<U: TimeUnit>(&self) -> TimerResult<CompactTimerPool<U>> {
        self.config.validate().map_err(TimerError::InvalidConfig)?;
        Ok(CompactTimerPool::with_epsilon(self.config.capacity, self.config.epsilon))
    }
}
