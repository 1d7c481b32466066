//! No-op logger used as a test double.

use seclog_ports::{LogEvent, LogFields, LogLevel, PreparedLogger, merge_fields};
use std::sync::Arc;

/// Logger that discards every event and only tracks bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkLogger {
    level: LogLevel,
    bindings: LogFields,
}

impl SinkLogger {
    /// Create a sink logger with the given level and bindings.
    #[must_use]
    pub const fn new(level: LogLevel, bindings: LogFields) -> Self {
        Self { level, bindings }
    }
}

impl PreparedLogger for SinkLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn log(&self, _event: LogEvent) {}

    fn bindings(&self) -> LogFields {
        self.bindings.clone()
    }

    fn child(&self, bindings: LogFields) -> Arc<dyn PreparedLogger> {
        Arc::new(Self::new(self.level, merge_fields(&self.bindings, bindings)))
    }
}

/// Build a logger that does nothing and holds `bindings` (empty when absent).
#[must_use]
pub fn build_sink_logger(level: LogLevel, bindings: Option<LogFields>) -> Arc<dyn PreparedLogger> {
    Arc::new(SinkLogger::new(level, bindings.unwrap_or_default()))
}
