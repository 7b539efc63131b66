//! # Error Tests
//!
//! Verifies error messages and the conversion from JSON parse errors.

use memsim_core::common::error::{AccessError, ConfigError};

#[test]
fn out_of_bounds_message() {
    let err = AccessError::OutOfBounds {
        addr: 0x10000,
        len: 4,
        size: 0x10000,
    };
    assert_eq!(
        err.to_string(),
        "access of 4 bytes at 0x10000 exceeds store size 0x10000"
    );
}

#[test]
fn misaligned_message() {
    let err = AccessError::Misaligned { addr: 0x6, align: 4 };
    assert_eq!(err.to_string(), "address 0x6 is not aligned to 4 bytes");
}

#[test]
fn level_out_of_range_message() {
    let err = AccessError::LevelOutOfRange { level: 3, levels: 2 };
    assert!(err.to_string().contains("level 3"));
}

#[test]
fn config_error_names_the_level() {
    let err = ConfigError::ZeroWays {
        name: "L2".to_string(),
    };
    assert_eq!(err.to_string(), "cache level `L2` has zero ways");
}

#[test]
fn json_errors_convert() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ConfigError::from(parse);
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid configuration:"));
}

#[test]
fn access_errors_are_std_errors() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&AccessError::Misaligned { addr: 1, align: 4 });
}
