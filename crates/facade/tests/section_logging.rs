//! Section derivation through the public facade API.

use seclog_facade::{
    AnyLogging, LogLevel, LoggingOptions, SECTIONS_KEY, SectionLog, build_sink_logger,
    is_logging_with_records, make_logging, make_logging_with_record,
    LoggingWithRecordsOptions,
};
use seclog_testkit::{CapturingLogger, log_fields};
use serde_json::json;

#[test]
fn plain_facade_starts_without_sections() {
    let logging = make_logging(LoggingOptions::new(build_sink_logger(LogLevel::Debug, None)));
    assert!(logging.sections().is_empty());
    logging.info("nothing happens", None);
}

#[test]
fn with_section_is_idempotent_and_grows() {
    let logging = make_logging(
        LoggingOptions::new(build_sink_logger(LogLevel::Debug, None)).with_section("custom"),
    );
    assert_eq!(logging.sections(), vec!["custom"]);

    let grown = logging.with_section("another", None);
    let same = logging.with_section("custom", None);

    assert!(!grown.same_instance(&logging));
    assert_eq!(grown.sections(), vec!["custom", "another"]);
    assert!(same.same_instance(&logging));
    assert_eq!(same.sections(), vec!["custom"]);
    assert_eq!(logging.sections(), vec!["custom"]);
}

#[test]
fn duplicate_section_drops_supplied_context() {
    let capture = CapturingLogger::new(LogLevel::Info);
    let logging = make_logging(LoggingOptions::new(capture.shared()).with_section("db"));

    let same = logging.with_section("db", Some(log_fields(json!({ "ignored": true }))));
    same.info("query", None);

    assert!(same.same_instance(&logging));
    let events = capture.events();
    assert_eq!(events.len(), 1);
    assert!(!events[0].bindings.contains_key("ignored"));
}

#[test]
fn section_context_lands_in_child_bindings() {
    let capture = CapturingLogger::new(LogLevel::Info);
    let logging = make_logging(LoggingOptions::new(capture.shared()).with_section("http"));
    let scoped = logging.with_section("auth", Some(log_fields(json!({ "user": "u1" }))));

    scoped.warn("denied", Some(&log_fields(json!({ "reason": "expired" }))));

    let events = capture.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message, "denied");
    assert_eq!(events[0].bindings.get("user"), Some(&json!("u1")));
    assert_eq!(events[0].bindings.get(SECTIONS_KEY), Some(&json!(["http", "auth"])));
    assert_eq!(
        events[0].fields,
        Some(log_fields(json!({ "reason": "expired" })))
    );
}

#[test]
fn context_without_section_derives_child() {
    let given = build_sink_logger(LogLevel::Info, None);
    let logging = make_logging(
        LoggingOptions::new(given.clone()).with_context(log_fields(json!({ "job": "sync" }))),
    );
    assert_eq!(logging.logger().bindings().get("job"), Some(&json!("sync")));
    assert!(given.bindings().is_empty());
}

#[test]
fn empty_section_name_is_ignored() {
    let logger = build_sink_logger(LogLevel::Debug, None);
    let logging = make_logging(LoggingOptions::new(logger.clone()).with_section(""));
    assert!(logging.sections().is_empty());
    assert!(std::sync::Arc::ptr_eq(logging.logger(), &logger));

    let capture = CapturingLogger::new(LogLevel::Info)
        .with_bindings(log_fields(json!({ SECTIONS_KEY: ["a"] })));
    let sectioned = make_logging(LoggingOptions::new(capture.shared()));
    let same = sectioned.with_section("", None);
    assert!(same.same_instance(&sectioned));
    assert_eq!(same.sections(), vec!["a"]);

    let scoped = sectioned.with_section("", Some(log_fields(json!({ "user": "u1" }))));
    scoped.info("hello", None);
    let events = capture.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].bindings.get(SECTIONS_KEY), Some(&json!(["a"])));
    assert_eq!(events[0].bindings.get("user"), Some(&json!("u1")));
}

#[test]
fn sections_ignore_malformed_bindings() {
    let logger = build_sink_logger(
        LogLevel::Info,
        Some(log_fields(json!({ SECTIONS_KEY: ["a", 1, "b"] }))),
    );
    let logging = make_logging(LoggingOptions::new(logger));
    assert_eq!(logging.sections(), vec!["a", "b"]);
}

#[test]
fn variant_tag_identifies_recording_facades() {
    let logger = build_sink_logger(LogLevel::Debug, None);
    let plain = AnyLogging::from(make_logging(LoggingOptions::new(logger.clone())));
    let recording = AnyLogging::from(make_logging_with_record(LoggingWithRecordsOptions::new(
        logger,
    )));

    assert!(!is_logging_with_records(&plain));
    assert!(is_logging_with_records(&recording));
    assert!(plain.messages().is_none());
    assert!(recording.messages().is_some());
}

#[test]
fn variant_keeps_its_flavour_across_sections() {
    let logger = build_sink_logger(LogLevel::Debug, None);
    let recording = AnyLogging::from(make_logging_with_record(
        LoggingWithRecordsOptions::new(logger.clone()).with_section("first"),
    ));
    let derived = recording.with_section("second", None);
    derived.error("boom", None);

    assert!(is_logging_with_records(&derived));
    assert_eq!(derived.sections(), vec!["first", "second"]);
    let ledger = recording.messages().map(|ledger| ledger.error().len());
    assert_eq!(ledger, Some(1));

    let plain = AnyLogging::from(make_logging(LoggingOptions::new(logger)));
    assert!(!is_logging_with_records(&plain.with_section("x", None)));
}
