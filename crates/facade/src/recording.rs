//! Recording decorator: a facade that also keeps every message in a shared
//! ledger, for assertions in tests.

use crate::logging::{Logging, LoggingOptions, SectionLog, make_logging};
use seclog_ports::{LogFields, PreparedLogger};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMessage {
    /// Message text.
    pub message: String,
    /// Context passed with the message, if any.
    pub context: Option<LogFields>,
}

impl RecordedMessage {
    /// Build a recorded message.
    #[must_use]
    pub fn new(message: impl Into<String>, context: Option<LogFields>) -> Self {
        Self {
            message: message.into(),
            context,
        }
    }
}

/// Level a message was recorded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageLevel {
    /// `info`.
    Info,
    /// `warn`.
    Warn,
    /// `debug`.
    Debug,
    /// `error`.
    Error,
}

/// Recorded messages per level, in call order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    /// Info messages.
    pub info: Vec<RecordedMessage>,
    /// Warn messages.
    pub warn: Vec<RecordedMessage>,
    /// Debug messages.
    pub debug: Vec<RecordedMessage>,
    /// Error messages.
    pub error: Vec<RecordedMessage>,
}

impl Messages {
    /// Messages recorded at `level`.
    #[must_use]
    pub fn at(&self, level: MessageLevel) -> &[RecordedMessage] {
        match level {
            MessageLevel::Info => &self.info,
            MessageLevel::Warn => &self.warn,
            MessageLevel::Debug => &self.debug,
            MessageLevel::Error => &self.error,
        }
    }

    fn at_mut(&mut self, level: MessageLevel) -> &mut Vec<RecordedMessage> {
        match level {
            MessageLevel::Info => &mut self.info,
            MessageLevel::Warn => &mut self.warn,
            MessageLevel::Debug => &mut self.debug,
            MessageLevel::Error => &mut self.error,
        }
    }

    /// Total number of recorded messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.info.len() + self.warn.len() + self.debug.len() + self.error.len()
    }

    /// Returns true when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared handle to a message ledger.
///
/// Cloning the handle aliases the same storage.
#[derive(Clone, Default)]
pub struct MessageLedger {
    inner: Arc<Mutex<Messages>>,
}

impl MessageLedger {
    /// Empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger seeded with existing messages.
    #[must_use]
    pub fn from_messages(messages: Messages) -> Self {
        Self {
            inner: Arc::new(Mutex::new(messages)),
        }
    }

    /// Append a message at `level`.
    pub fn record(&self, level: MessageLevel, message: &str, context: Option<&LogFields>) {
        self.lock()
            .at_mut(level)
            .push(RecordedMessage::new(message, context.cloned()));
    }

    /// Copy of every recorded message.
    #[must_use]
    pub fn snapshot(&self) -> Messages {
        self.lock().clone()
    }

    /// Copy of the messages recorded at `level`.
    #[must_use]
    pub fn at(&self, level: MessageLevel) -> Vec<RecordedMessage> {
        self.lock().at(level).to_vec()
    }

    /// Info messages.
    #[must_use]
    pub fn info(&self) -> Vec<RecordedMessage> {
        self.at(MessageLevel::Info)
    }

    /// Warn messages.
    #[must_use]
    pub fn warn(&self) -> Vec<RecordedMessage> {
        self.at(MessageLevel::Warn)
    }

    /// Debug messages.
    #[must_use]
    pub fn debug(&self) -> Vec<RecordedMessage> {
        self.at(MessageLevel::Debug)
    }

    /// Error messages.
    #[must_use]
    pub fn error(&self) -> Vec<RecordedMessage> {
        self.at(MessageLevel::Error)
    }

    /// Whether both handles point at the same storage.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // A panicking logger must not make the ledger unreadable.
    fn lock(&self) -> MutexGuard<'_, Messages> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for MessageLedger {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("MessageLedger")
            .field(&self.snapshot())
            .finish()
    }
}

/// Options for [`make_logging_with_record`].
#[derive(Clone)]
pub struct LoggingWithRecordsOptions {
    /// Logger to wrap or derive from.
    pub logger: Arc<dyn PreparedLogger>,
    /// Section to append.
    pub section: Option<String>,
    /// Extra bindings for the derived logger.
    pub context: Option<LogFields>,
    /// Ledger to record into; a fresh one is allocated when absent.
    pub messages: Option<MessageLedger>,
}

impl LoggingWithRecordsOptions {
    /// Options wrapping `logger` with a fresh ledger.
    #[must_use]
    pub fn new(logger: Arc<dyn PreparedLogger>) -> Self {
        Self {
            logger,
            section: None,
            context: None,
            messages: None,
        }
    }

    /// Set the section.
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Set the context.
    #[must_use]
    pub fn with_context(mut self, context: LogFields) -> Self {
        self.context = Some(context);
        self
    }

    /// Record into an existing ledger.
    #[must_use]
    pub fn with_messages(mut self, messages: MessageLedger) -> Self {
        self.messages = Some(messages);
        self
    }
}

/// Facade that records each message before forwarding it.
#[derive(Clone, Debug)]
pub struct LoggingWithRecords {
    logging: Logging,
    messages: MessageLedger,
}

impl LoggingWithRecords {
    /// Ledger this instance records into.
    #[must_use]
    pub const fn messages(&self) -> &MessageLedger {
        &self.messages
    }

    /// Inner facade.
    #[must_use]
    pub const fn logging(&self) -> &Logging {
        &self.logging
    }

    fn record_and_forward(&self, level: MessageLevel, message: &str, context: Option<&LogFields>) {
        self.messages.record(level, message, context);
        match level {
            MessageLevel::Info => self.logging.info(message, context),
            MessageLevel::Warn => self.logging.warn(message, context),
            MessageLevel::Debug => self.logging.debug(message, context),
            MessageLevel::Error => self.logging.error(message, context),
        }
    }
}

impl SectionLog for LoggingWithRecords {
    fn logger(&self) -> &Arc<dyn PreparedLogger> {
        self.logging.logger()
    }

    fn info(&self, message: &str, context: Option<&LogFields>) {
        self.record_and_forward(MessageLevel::Info, message, context);
    }

    fn debug(&self, message: &str, context: Option<&LogFields>) {
        self.record_and_forward(MessageLevel::Debug, message, context);
    }

    fn warn(&self, message: &str, context: Option<&LogFields>) {
        self.record_and_forward(MessageLevel::Warn, message, context);
    }

    fn error(&self, message: &str, context: Option<&LogFields>) {
        self.record_and_forward(MessageLevel::Error, message, context);
    }

    fn with_section(&self, section: &str, context: Option<LogFields>) -> Self {
        make_logging_with_record(LoggingWithRecordsOptions {
            logger: Arc::clone(self.logger()),
            section: Some(section.to_string()),
            context,
            messages: Some(self.messages.clone()),
        })
    }
}

/// Build a recording facade.
#[must_use]
pub fn make_logging_with_record(options: LoggingWithRecordsOptions) -> LoggingWithRecords {
    let LoggingWithRecordsOptions {
        logger,
        section,
        context,
        messages,
    } = options;
    let mut logging_options = LoggingOptions::new(logger);
    logging_options.section = section;
    logging_options.context = context;

    LoggingWithRecords {
        logging: make_logging(logging_options),
        messages: messages.unwrap_or_default(),
    }
}
