//! Tests for configuration validation

use countdown_pool::config::{TimerPoolConfig, CAPACITY_ENV, EPSILON_ENV};

#[test]
fn test_default_config_is_valid() {
    let config = TimerPoolConfig::default();
    assert_eq!(config.capacity, 16);
    assert!((config.epsilon - 0.001).abs() < f64::EPSILON);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_invalid_capacity() {
    let invalid = TimerPoolConfig::new(0);
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_invalid_epsilon() {
    assert!(TimerPoolConfig::new(4).with_epsilon(-0.5).validate().is_err());
    assert!(TimerPoolConfig::new(4).with_epsilon(f64::NAN).validate().is_err());
    assert!(TimerPoolConfig::new(4).with_epsilon(0.0).validate().is_ok());
}

#[test]
fn test_config_from_json() {
    let json = r#"{ "capacity": 32, "epsilon": 0.0001 }"#;
    let config = TimerPoolConfig::from_json_str(json).unwrap();
    assert_eq!(config.capacity, 32);
    assert!((config.epsilon - 0.0001).abs() < f64::EPSILON);
}

#[test]
fn test_config_from_json_uses_defaults() {
    let config = TimerPoolConfig::from_json_str(r#"{ "capacity": 8 }"#).unwrap();
    assert_eq!(config, TimerPoolConfig::new(8));
}

#[test]
fn test_config_from_json_rejects_invalid() {
    assert!(TimerPoolConfig::from_json_str(r#"{ "capacity": 0 }"#).is_err());
    assert!(TimerPoolConfig::from_json_str("not json").is_err());
}

#[test]
fn test_config_from_lookup() {
    let config = TimerPoolConfig::from_lookup(|key| match key {
        k if k == CAPACITY_ENV => Some(" 64 ".to_string()),
        k if k == EPSILON_ENV => Some("0.01".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.capacity, 64);
    assert!((config.epsilon - 0.01).abs() < f64::EPSILON);
}

#[test]
fn test_config_from_lookup_rejects_garbage() {
    let err = TimerPoolConfig::from_lookup(|key| {
        (key == CAPACITY_ENV).then(|| "many".to_string())
    })
    .unwrap_err();
    assert!(err.to_string().contains(CAPACITY_ENV));

    assert!(TimerPoolConfig::from_lookup(|key| {
        (key == CAPACITY_ENV).then(|| "0".to_string())
    })
    .is_err());
}

#[test]
fn test_config_and_builder_from_process_env() {
    // Only this test touches these variables.
    std::env::set_var(CAPACITY_ENV, "12");
    std::env::set_var(EPSILON_ENV, "0.005");

    let config = TimerPoolConfig::from_env().unwrap();
    assert_eq!(config.capacity, 12);
    assert!((config.epsilon - 0.005).abs() < f64::EPSILON);

    let pool = countdown_pool::builders::TimerPoolBuilder::from_env()
        .unwrap()
        .build::<f64>()
        .unwrap();
    assert_eq!(pool.capacity(), 12);
    assert!((pool.threshold() - 0.005).abs() < f64::EPSILON);

    std::env::set_var(CAPACITY_ENV, "zero");
    assert!(TimerPoolConfig::from_env().is_err());

    std::env::remove_var(CAPACITY_ENV);
    std::env::remove_var(EPSILON_ENV);
    assert_eq!(TimerPoolConfig::from_env().unwrap(), TimerPoolConfig::default());
}
