//! Tests for builder modules

use countdown_pool::builders::TimerPoolBuilder;
use countdown_pool::config::TimerPoolConfig;
use countdown_pool::core::TimerError;

#[test]
fn test_pool_builder_defaults() {
    let builder = TimerPoolBuilder::new();
    assert_eq!(builder.config(), &TimerPoolConfig::default());

    let pool = builder.build::<i64>().unwrap();
    assert_eq!(pool.capacity(), 16);
    assert_eq!(pool.threshold(), 0);
}

#[test]
fn test_pool_builder_overrides() {
    let pool = TimerPoolBuilder::new()
        .capacity(4)
        .epsilon(0.05)
        .build::<f64>()
        .unwrap();
    assert_eq!(pool.capacity(), 4);
    assert!((pool.threshold() - 0.05).abs() < f64::EPSILON);
}

#[test]
fn test_pool_builder_rejects_invalid_config() {
    let err = TimerPoolBuilder::new().capacity(0).build::<i64>().unwrap_err();
    assert!(matches!(err, TimerError::InvalidConfig(_)));
    assert!(TimerPoolBuilder::new().capacity(0).build_compact::<f64>().is_err());
}

#[test]
fn test_pool_builder_flavors() {
    let builder = TimerPoolBuilder::from_config(TimerPoolConfig::new(2));

    let compact = builder.build_compact::<i32>().unwrap();
    assert_eq!(compact.capacity(), 2);

    let shared = builder.build_shared::<i64>().unwrap();
    shared.reserve().unwrap();
    assert_eq!(shared.stats().reserved, 1);
}
