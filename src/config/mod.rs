//! Configuration models for timer pools.

pub mod pool;

pub use pool::{TimerPoolConfig, CAPACITY_ENV, EPSILON_ENV};
