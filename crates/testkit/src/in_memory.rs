//! In-memory sinks and loggers for tests.

use seclog_ports::{LogEvent, LogFields, LogLevel, LogSink, PreparedLogger, merge_fields};
use std::sync::{Arc, Mutex};

/// Line sink that keeps every written line in memory.
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return the captured lines.
    pub fn take(&self) -> Vec<String> {
        let mut guard = self.lines.lock().expect("memory sink lock");
        std::mem::take(&mut *guard)
    }

    /// Copy of the captured lines, without draining.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("memory sink lock").clone()
    }

    /// Parse every captured line as JSON, draining the sink.
    pub fn take_json(&self) -> Vec<serde_json::Value> {
        self.take()
            .iter()
            .map(|line| serde_json::from_str(line.trim_end()).expect("captured line is JSON"))
            .collect()
    }
}

impl LogSink for MemoryLogSink {
    fn write_line(&self, line: &str) {
        let mut guard = self.lines.lock().expect("memory sink lock");
        guard.push(line.to_string());
    }
}

/// An event seen by [`CapturingLogger`], together with the bindings of the
/// logger that received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    /// Event level.
    pub level: LogLevel,
    /// Event message.
    pub message: String,
    /// Event context, as passed by the caller.
    pub fields: Option<LogFields>,
    /// Bindings of the receiving logger at emission time.
    pub bindings: LogFields,
}

/// Logger capturing every event regardless of level.
///
/// Children share the parent's event list, so one handle observes a whole
/// derivation tree.
#[derive(Debug, Clone)]
pub struct CapturingLogger {
    level: LogLevel,
    bindings: LogFields,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CapturingLogger {
    /// Create a capturing logger at `level` with no bindings.
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            bindings: LogFields::new(),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Replace the bindings.
    #[must_use]
    pub fn with_bindings(mut self, bindings: LogFields) -> Self {
        self.bindings = bindings;
        self
    }

    /// Copy of the captured events.
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().expect("capturing logger lock").clone()
    }

    /// Shared handle usable as a facade logger; events stay observable here.
    pub fn shared(&self) -> Arc<dyn PreparedLogger> {
        Arc::new(self.clone())
    }
}

impl PreparedLogger for CapturingLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn log(&self, event: LogEvent) {
        let captured = CapturedEvent {
            level: event.level,
            message: event.message.into_string(),
            fields: event.fields,
            bindings: self.bindings.clone(),
        };
        self.events
            .lock()
            .expect("capturing logger lock")
            .push(captured);
    }

    fn bindings(&self) -> LogFields {
        self.bindings.clone()
    }

    fn child(&self, bindings: LogFields) -> Arc<dyn PreparedLogger> {
        Arc::new(Self {
            level: self.level,
            bindings: merge_fields(&self.bindings, bindings),
            events: Arc::clone(&self.events),
        })
    }
}

/// Logger whose every emission panics. Derivation works normally.
#[derive(Debug, Clone, Default)]
pub struct PanickingLogger {
    bindings: LogFields,
}

impl PanickingLogger {
    /// Message carried by the panic payload.
    pub const PANIC_MESSAGE: &'static str = "underlying logger failed";

    /// Create a panicking logger.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreparedLogger for PanickingLogger {
    fn level(&self) -> LogLevel {
        LogLevel::Trace
    }

    fn log(&self, _event: LogEvent) {
        panic!("{}", Self::PANIC_MESSAGE);
    }

    fn bindings(&self) -> LogFields {
        self.bindings.clone()
    }

    fn child(&self, bindings: LogFields) -> Arc<dyn PreparedLogger> {
        Arc::new(Self {
            bindings: merge_fields(&self.bindings, bindings),
        })
    }
}
