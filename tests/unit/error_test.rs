//! Tests for error types

use countdown_pool::core::TimerError;

#[test]
fn test_capacity_exhausted_error() {
    let err = TimerError::CapacityExhausted { capacity: 16 };
    assert_eq!(format!("{}", err), "capacity exhausted: all 16 slots in use");
}

#[test]
fn test_invalid_handle_error() {
    let err = TimerError::InvalidHandle { index: 20, capacity: 16 };
    assert_eq!(format!("{}", err), "invalid handle 20: pool capacity is 16");
}

#[test]
fn test_not_reserved_error() {
    let err = TimerError::NotReserved(3);
    assert_eq!(format!("{}", err), "handle 3 is not reserved");
}

#[test]
fn test_invalid_config_error() {
    let err = TimerError::InvalidConfig("capacity must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: capacity must be greater than 0"
    );
}
