//! Integration tests for error propagation across crates.

use seclog_ports::{LevelError, LogLevel, parse_log_level_or_default};
use seclog_shared::{ErrorCode, ErrorEnvelope, ErrorKind};

#[test]
fn level_errors_cross_into_the_envelope() {
    let error = parse_log_level_or_default(Some("Verbose"), LogLevel::Info)
        .map_err(ErrorEnvelope::from)
        .err();
    let envelope = error.expect("invalid level");

    assert_eq!(envelope.kind, ErrorKind::Expected);
    assert_eq!(envelope.code, ErrorCode::new("ports", "invalid_log_level"));
    assert_eq!(envelope.message, "Invalid log level: Verbose");
    assert_eq!(envelope.metadata.get("input").map(String::as_str), Some("Verbose"));

    let boxed: Box<dyn std::error::Error> = Box::new(envelope);
    assert!(boxed.to_string().contains("ports:invalid_log_level"));
}

#[test]
fn level_error_is_a_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(LevelError::InvalidLevel {
        input: "x".to_string(),
    });
    assert_eq!(error.to_string(), "Invalid log level: x");
}
