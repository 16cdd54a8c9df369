//! Timer pool configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{AppResult, DEFAULT_CAPACITY, DEFAULT_EPSILON};

/// Environment variable overriding [`TimerPoolConfig::capacity`].
pub const CAPACITY_ENV: &str = "COUNTDOWN_POOL_CAPACITY";
/// Environment variable overriding [`TimerPoolConfig::epsilon`].
pub const EPSILON_ENV: &str = "COUNTDOWN_POOL_EPSILON";

/// Construction-time parameters of a pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerPoolConfig {
    /// Number of slots, fixed for the lifetime of the pool.
    pub capacity: usize,
    /// Zero-crossing threshold for real-valued time domains (seconds).
    pub epsilon: f64,
}

impl Default for TimerPoolConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl TimerPoolConfig {
    /// Config with the given capacity and the default epsilon.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Replace the epsilon.
    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("capacity must be greater than 0".into());
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(format!("epsilon must be finite and non-negative, got {}", self.epsilon));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the process environment, reading a `.env` file
    /// first if one exists. Unset variables keep their defaults.
    pub fn from_env() -> AppResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(CAPACITY_ENV) {
            cfg.capacity = raw
                .trim()
                .parse()
                .with_context(|| format!("{CAPACITY_ENV}={raw:?} is not a slot count"))?;
        }
        if let Some(raw) = lookup(EPSILON_ENV) {
            cfg.epsilon = raw
                .trim()
                .parse()
                .with_context(|| format!("{EPSILON_ENV}={raw:?} is not a number"))?;
        }
        cfg.validate().map_err(anyhow::Error::msg)?;
        Ok(cfg)
    }
}
