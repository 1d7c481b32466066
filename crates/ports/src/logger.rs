//! Prepared logger capability.
//!
//! Any concrete logger (JSON lines, tracing bridge, no-op sink) satisfies
//! [`PreparedLogger`]; the section-aware facade only ever talks to this trait.

use crate::LogLevel;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Structured key/value context attached to events and bindings.
pub type LogFields = BTreeMap<Box<str>, serde_json::Value>;

/// Reserved binding key holding the ordered section list.
pub const SECTIONS_KEY: &str = "logSections";

/// Structured log event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    /// Severity.
    pub level: LogLevel,
    /// Human-readable message.
    pub message: Box<str>,
    /// Optional structured context.
    pub fields: Option<LogFields>,
}

impl LogEvent {
    /// Build an event from borrowed parts.
    #[must_use]
    pub fn new(level: LogLevel, message: &str, fields: Option<&LogFields>) -> Self {
        Self {
            level,
            message: message.to_owned().into_boxed_str(),
            fields: fields.cloned(),
        }
    }
}

/// Logger capability consumed by the logging facade.
///
/// Context comes before the message, matching the structured-logger
/// convention the facade forwards to.
pub trait PreparedLogger: Send + Sync {
    /// Minimum level this logger emits.
    fn level(&self) -> LogLevel;

    /// Emit a structured event.
    fn log(&self, event: LogEvent);

    /// Accumulated bindings applied to every event.
    fn bindings(&self) -> LogFields;

    /// Derive a logger whose bindings are this logger's bindings merged with
    /// `bindings`; same-key values from `bindings` win.
    fn child(&self, bindings: LogFields) -> Arc<dyn PreparedLogger>;

    /// Convenience: info event.
    fn info(&self, fields: Option<&LogFields>, message: &str) {
        self.log(LogEvent::new(LogLevel::Info, message, fields));
    }

    /// Convenience: debug event.
    fn debug(&self, fields: Option<&LogFields>, message: &str) {
        self.log(LogEvent::new(LogLevel::Debug, message, fields));
    }

    /// Convenience: warn event.
    fn warn(&self, fields: Option<&LogFields>, message: &str) {
        self.log(LogEvent::new(LogLevel::Warn, message, fields));
    }

    /// Convenience: error event.
    fn error(&self, fields: Option<&LogFields>, message: &str) {
        self.log(LogEvent::new(LogLevel::Error, message, fields));
    }
}

/// Merge `overrides` on top of `base`; keys in `overrides` win.
#[must_use]
pub fn merge_fields(base: &LogFields, overrides: LogFields) -> LogFields {
    let mut merged = base.clone();
    merged.extend(overrides);
    merged
}

/// Read the ordered section list from a bindings map.
///
/// A missing key or a non-array value yields an empty list; non-string
/// entries are skipped.
#[must_use]
pub fn sections_from_bindings(bindings: &LogFields) -> Vec<String> {
    bindings
        .get(SECTIONS_KEY)
        .and_then(serde_json::Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
