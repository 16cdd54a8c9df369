//! Time domains a countdown can be expressed in.
//!
//! A pool is generic over the numeric type of its durations. Integer types
//! count discrete logical ticks (frames, simulation steps) and expire exactly
//! at zero. Floating-point types count elapsed seconds and expire once the
//! remaining time drops to a small positive threshold, so accumulated rounding
//! residue such as `1e-7` still counts as done.

use std::cmp::Ordering;
use std::fmt;

/// Default zero-crossing threshold for real-valued time domains.
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Numeric type usable as a countdown duration.
pub trait TimeUnit: Copy + PartialOrd + Default + fmt::Debug + fmt::Display + Send + 'static {
    /// Zero-crossing threshold derived from a configured epsilon.
    ///
    /// Integer domains ignore the epsilon and always use zero.
    fn threshold(epsilon: f64) -> Self;

    /// Advance a countdown by `delta`.
    #[must_use]
    fn count_down(self, delta: Self) -> Self;

    /// Whether a delta is too small (or of the wrong sign) to be worth applying
    /// in the swap-compaction pool.
    fn is_negligible(delta: Self, threshold: Self) -> bool;

    /// `true` once `remaining` is no longer strictly above `threshold`.
    fn is_expired(remaining: Self, threshold: Self) -> bool {
        !matches!(remaining.partial_cmp(&threshold), Some(Ordering::Greater))
    }
}

macro_rules! integer_time_unit {
    ($($ty:ty),*) => {$(
        impl TimeUnit for $ty {
            fn threshold(_epsilon: f64) -> Self {
                0
            }

            fn count_down(self, delta: Self) -> Self {
                self.saturating_sub(delta)
            }

            fn is_negligible(delta: Self, _threshold: Self) -> bool {
                delta < 0
            }
        }
    )*};
}

integer_time_unit!(i32, i64);

impl TimeUnit for f64 {
    fn threshold(epsilon: f64) -> Self {
        epsilon
    }

    fn count_down(self, delta: Self) -> Self {
        self - delta
    }

    fn is_negligible(delta: Self, threshold: Self) -> bool {
        delta.abs() < threshold
    }
}

impl TimeUnit for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn threshold(epsilon: f64) -> Self {
        epsilon as f32
    }

    fn count_down(self, delta: Self) -> Self {
        self - delta
    }

    fn is_negligible(delta: Self, threshold: Self) -> bool {
        delta.abs() < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_expiry_at_zero() {
        let threshold = i64::threshold(DEFAULT_EPSILON);
        assert_eq!(threshold, 0);
        assert!(!i64::is_expired(1, threshold));
        assert!(i64::is_expired(0, threshold));
        assert!(i64::is_expired(-3, threshold));
    }

    #[test]
    fn test_integer_count_down_saturates() {
        assert_eq!(5_i64.count_down(2), 3);
        assert_eq!(i32::MIN.count_down(1), i32::MIN);
    }

    #[test]
    fn test_real_expiry_uses_epsilon() {
        let threshold = f64::threshold(0.001);
        assert!(!f64::is_expired(1.0_f64.count_down(0.999), threshold));
        assert!(f64::is_expired(1.0_f64.count_down(0.9991), threshold));
        assert!(f64::is_expired(f64::NAN, threshold));
    }

    #[test]
    fn test_negligible_deltas() {
        assert!(i64::is_negligible(-1, 0));
        assert!(!i64::is_negligible(0, 0));
        assert!(f64::is_negligible(0.0001, 0.001));
        assert!(!f64::is_negligible(-0.5, 0.001));
    }
}
