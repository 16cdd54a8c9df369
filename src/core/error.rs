//! Error types for timer pool operations.

use thiserror::Error;

/// Errors produced by timer pool components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// Every slot in the pool is already reserved.
    #[error("capacity exhausted: all {capacity} slots in use")]
    CapacityExhausted {
        /// Fixed capacity of the pool that rejected the request.
        capacity: usize,
    },
    /// Handle does not address a slot of this pool.
    #[error("invalid handle {index}: pool capacity is {capacity}")]
    InvalidHandle {
        /// Slot index carried by the handle.
        index: usize,
        /// Fixed capacity of the pool.
        capacity: usize,
    },
    /// Handle addresses a slot that is not currently reserved.
    #[error("handle {0} is not reserved")]
    NotReserved(usize),
    /// Duration would expire without a single tick.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for timer pool operations.
pub type TimerResult<T> = Result<T, TimerError>;

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
