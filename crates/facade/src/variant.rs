//! Tagged union over the two facade flavours.

use crate::logging::{Logging, SectionLog};
use crate::recording::{LoggingWithRecords, MessageLedger};
use seclog_ports::{LogFields, PreparedLogger};
use std::sync::Arc;

/// Either a plain facade or a recording one.
#[derive(Clone, Debug)]
pub enum AnyLogging {
    /// Plain facade.
    Plain(Logging),
    /// Recording facade.
    Recording(LoggingWithRecords),
}

impl AnyLogging {
    /// The ledger, for the recording variant.
    #[must_use]
    pub const fn messages(&self) -> Option<&MessageLedger> {
        match self {
            Self::Plain(_) => None,
            Self::Recording(recording) => Some(recording.messages()),
        }
    }
}

/// True exactly for [`AnyLogging::Recording`].
#[must_use]
pub const fn is_logging_with_records(logging: &AnyLogging) -> bool {
    matches!(logging, AnyLogging::Recording(_))
}

impl From<Logging> for AnyLogging {
    fn from(logging: Logging) -> Self {
        Self::Plain(logging)
    }
}

impl From<LoggingWithRecords> for AnyLogging {
    fn from(logging: LoggingWithRecords) -> Self {
        Self::Recording(logging)
    }
}

impl SectionLog for AnyLogging {
    fn logger(&self) -> &Arc<dyn PreparedLogger> {
        match self {
            Self::Plain(logging) => logging.logger(),
            Self::Recording(logging) => logging.logger(),
        }
    }

    fn info(&self, message: &str, context: Option<&LogFields>) {
        match self {
            Self::Plain(logging) => logging.info(message, context),
            Self::Recording(logging) => logging.info(message, context),
        }
    }

    fn debug(&self, message: &str, context: Option<&LogFields>) {
        match self {
            Self::Plain(logging) => logging.debug(message, context),
            Self::Recording(logging) => logging.debug(message, context),
        }
    }

    fn warn(&self, message: &str, context: Option<&LogFields>) {
        match self {
            Self::Plain(logging) => logging.warn(message, context),
            Self::Recording(logging) => logging.warn(message, context),
        }
    }

    fn error(&self, message: &str, context: Option<&LogFields>) {
        match self {
            Self::Plain(logging) => logging.error(message, context),
            Self::Recording(logging) => logging.error(message, context),
        }
    }

    fn with_section(&self, section: &str, context: Option<LogFields>) -> Self {
        match self {
            Self::Plain(logging) => Self::Plain(logging.with_section(section, context)),
            Self::Recording(logging) => Self::Recording(logging.with_section(section, context)),
        }
    }
}
