//! Structured JSON logger adapter.
//!
//! Emits one JSON object per line: `level` (numeric), `time` (ISO-8601 UTC),
//! `pid`, the logger bindings, the event context and `msg`.

use crate::log_sink::StdoutLogSink;
use chrono::{SecondsFormat, Utc};
use seclog_ports::{LogEvent, LogFields, LogLevel, LogSink, PreparedLogger, merge_fields};
use seclog_shared::RedactPaths;
use serde_json::{Map, Value};
use std::sync::Arc;

const FALLBACK_LINE: &str = "{\"level\":50,\"msg\":\"log serialization failed\"}\n";

/// JSON logger emitting one line per event.
#[derive(Clone)]
pub struct JsonLogger {
    sink: Arc<dyn LogSink>,
    bindings: LogFields,
    level: LogLevel,
    redact: Arc<RedactPaths>,
}

impl JsonLogger {
    /// Create a JSON logger backed by the provided sink, at `info` with the
    /// default redact paths.
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            bindings: LogFields::new(),
            level: LogLevel::Info,
            redact: Arc::new(RedactPaths::defaults()),
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub const fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set base bindings applied to every event.
    #[must_use]
    pub fn with_bindings(mut self, bindings: LogFields) -> Self {
        self.bindings = bindings;
        self
    }

    /// Replace the redact paths.
    #[must_use]
    pub fn with_redact_paths(mut self, paths: RedactPaths) -> Self {
        self.redact = Arc::new(paths);
        self
    }

    fn render(&self, event: LogEvent) -> String {
        let mut payload = Map::new();
        for (key, value) in &self.bindings {
            payload.insert(key.to_string(), value.clone());
        }
        if let Some(fields) = event.fields {
            for (key, value) in fields {
                payload.insert(key.into_string(), value);
            }
        }
        payload.insert("level".to_string(), Value::from(event.level.value()));
        payload.insert("time".to_string(), Value::String(now_iso()));
        payload.insert("pid".to_string(), Value::from(std::process::id()));
        payload.insert("msg".to_string(), Value::String(event.message.into_string()));

        self.redact.apply(&mut payload);

        serde_json::to_string(&Value::Object(payload)).map_or_else(
            |_| FALLBACK_LINE.to_string(),
            |mut encoded| {
                encoded.push('\n');
                encoded
            },
        )
    }
}

impl PreparedLogger for JsonLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn log(&self, event: LogEvent) {
        if !self.level.enables(event.level) {
            return;
        }
        let line = self.render(event);
        self.sink.write_line(&line);
    }

    fn bindings(&self) -> LogFields {
        self.bindings.clone()
    }

    fn child(&self, bindings: LogFields) -> Arc<dyn PreparedLogger> {
        Arc::new(Self {
            sink: Arc::clone(&self.sink),
            bindings: merge_fields(&self.bindings, bindings),
            level: self.level,
            redact: Arc::clone(&self.redact),
        })
    }
}

/// Build a JSON logger writing to stdout.
///
/// `redact_paths` defaults to the `authorization` and `cookie` request headers.
#[must_use]
pub fn build_json_logger(level: LogLevel, redact_paths: Option<&[&str]>) -> Arc<dyn PreparedLogger> {
    let redact = redact_paths.map_or_else(RedactPaths::defaults, |paths| {
        RedactPaths::from_strs(paths.iter().copied())
    });
    Arc::new(
        JsonLogger::new(Arc::new(StdoutLogSink))
            .with_level(level)
            .with_redact_paths(redact),
    )
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seclog_ports::SECTIONS_KEY;
    use seclog_shared::REDACTED;
    use seclog_testkit::{MemoryLogSink, log_fields};
    use serde_json::json;

    fn logger_with_sink(level: LogLevel) -> (JsonLogger, Arc<MemoryLogSink>) {
        let sink = Arc::new(MemoryLogSink::new());
        let logger = JsonLogger::new(sink.clone()).with_level(level);
        (logger, sink)
    }

    #[test]
    fn writes_one_json_line_per_event() {
        let (logger, sink) = logger_with_sink(LogLevel::Debug);
        logger.info(Some(&log_fields(json!({ "userId": 7 }))), "signed in");

        let lines = sink.take();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with('\n'));

        let payload: Value = serde_json::from_str(lines[0].trim_end()).unwrap_or(Value::Null);
        assert_eq!(payload["level"], 30);
        assert_eq!(payload["msg"], "signed in");
        assert_eq!(payload["userId"], 7);
        assert_eq!(payload["pid"], std::process::id());
        let time = payload["time"].as_str().unwrap_or_default();
        assert!(time.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(time).is_ok());
    }

    #[test]
    fn events_below_threshold_are_dropped() {
        let (logger, sink) = logger_with_sink(LogLevel::Warn);
        logger.debug(None, "noise");
        logger.info(None, "noise");
        logger.warn(None, "kept");
        logger.error(None, "kept");

        let levels: Vec<Value> = sink
            .take_json()
            .into_iter()
            .map(|payload| payload["level"].clone())
            .collect();
        assert_eq!(levels, vec![json!(40), json!(50)]);
    }

    #[test]
    fn silent_logger_emits_nothing() {
        let (logger, sink) = logger_with_sink(LogLevel::Silent);
        logger.error(None, "still quiet");
        logger.log(LogEvent::new(LogLevel::Fatal, "fatal too", None));
        assert!(sink.take().is_empty());
    }

    #[test]
    fn child_bindings_are_merged_into_output() {
        let (logger, sink) = logger_with_sink(LogLevel::Info);
        let logger = logger.with_bindings(log_fields(json!({ "service": "api", "env": "dev" })));
        let child = logger.child(log_fields(json!({
            "env": "prod",
            SECTIONS_KEY: ["http"]
        })));

        child.info(Some(&log_fields(json!({ "status": 200 }))), "done");

        let payloads = sink.take_json();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0]["service"], "api");
        assert_eq!(payloads[0]["env"], "prod");
        assert_eq!(payloads[0][SECTIONS_KEY], json!(["http"]));
        assert_eq!(payloads[0]["status"], 200);
        assert_eq!(logger.bindings().get("env"), Some(&json!("dev")));
    }

    #[test]
    fn event_context_overrides_bindings_but_not_core_keys() {
        let (logger, sink) = logger_with_sink(LogLevel::Info);
        let logger = logger.with_bindings(log_fields(json!({ "scope": "binding" })));
        logger.info(
            Some(&log_fields(json!({ "scope": "event", "msg": "sneaky" }))),
            "real message",
        );

        let payloads = sink.take_json();
        assert_eq!(payloads[0]["scope"], "event");
        assert_eq!(payloads[0]["msg"], "real message");
    }

    #[test]
    fn default_paths_redact_request_headers() {
        let (logger, sink) = logger_with_sink(LogLevel::Info);
        logger.info(
            Some(&log_fields(json!({
                "req": {
                    "headers": {
                        "authorization": "Bearer abc", // pragma: allowlist secret
                        "cookie": "sid=1",
                        "host": "example.test"
                    }
                }
            }))),
            "request",
        );

        let payloads = sink.take_json();
        let headers = &payloads[0]["req"]["headers"];
        assert_eq!(headers["authorization"], REDACTED);
        assert_eq!(headers["cookie"], REDACTED);
        assert_eq!(headers["host"], "example.test");
    }

    #[test]
    fn custom_redact_paths_replace_defaults() {
        let (logger, sink) = logger_with_sink(LogLevel::Info);
        let logger = logger
            .with_redact_paths(RedactPaths::from_strs(["user.password"]))
            .with_bindings(log_fields(json!({ "user": { "password": "p" } }))); // pragma: allowlist secret
        logger.info(
            Some(&log_fields(json!({ "req": { "headers": { "cookie": "c" } } }))),
            "login",
        );

        let payloads = sink.take_json();
        assert_eq!(payloads[0]["user"]["password"], REDACTED);
        assert_eq!(payloads[0]["req"]["headers"]["cookie"], "c");
    }

    #[test]
    fn built_logger_reports_level() {
        let logger = build_json_logger(LogLevel::Debug, None);
        assert_eq!(logger.level(), LogLevel::Debug);
        assert!(logger.bindings().is_empty());

        let custom = build_json_logger(LogLevel::Error, Some(&["a.b"]));
        assert_eq!(custom.level(), LogLevel::Error);
    }
}
