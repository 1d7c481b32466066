//! Section-aware logging facade.

use crate::sections::logger_for;
use seclog_ports::{LogFields, PreparedLogger, sections_from_bindings};
use std::fmt;
use std::sync::Arc;

/// Operations shared by the plain facade and the recording decorator.
///
/// Messages come first and context second; the underlying logger receives
/// them in its own (context, message) order.
pub trait SectionLog: Sized {
    /// Wrapped logger.
    fn logger(&self) -> &Arc<dyn PreparedLogger>;

    /// Info message.
    fn info(&self, message: &str, context: Option<&LogFields>);

    /// Debug message.
    fn debug(&self, message: &str, context: Option<&LogFields>);

    /// Warn message.
    fn warn(&self, message: &str, context: Option<&LogFields>);

    /// Error message.
    fn error(&self, message: &str, context: Option<&LogFields>);

    /// Section list declared by the wrapped logger, outermost first.
    fn sections(&self) -> Vec<String> {
        sections_from_bindings(&self.logger().bindings())
    }

    /// Derive an instance scoped to `section`, with optional extra context.
    fn with_section(&self, section: &str, context: Option<LogFields>) -> Self;
}

/// Options for [`make_logging`].
#[derive(Clone)]
pub struct LoggingOptions {
    /// Logger to wrap or derive from.
    pub logger: Arc<dyn PreparedLogger>,
    /// Section to append.
    pub section: Option<String>,
    /// Extra bindings for the derived logger.
    pub context: Option<LogFields>,
}

impl LoggingOptions {
    /// Options wrapping `logger` with no section or context.
    #[must_use]
    pub fn new(logger: Arc<dyn PreparedLogger>) -> Self {
        Self {
            logger,
            section: None,
            context: None,
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
}

impl fmt::Debug for LoggingOptions {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoggingOptions")
            .field("level", &self.logger.level())
            .field("section", &self.section)
            .field("context", &self.context)
            .finish()
    }
}

/// Section-aware facade over a prepared logger.
///
/// Clones share the wrapped logger and count as the same instance.
#[derive(Clone)]
pub struct Logging {
    logger: Arc<dyn PreparedLogger>,
}

impl Logging {
    /// Whether both facades wrap the same logger allocation.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.logger), Arc::as_ptr(&other.logger))
    }
}

impl fmt::Debug for Logging {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Logging")
            .field("level", &self.logger.level())
            .field("sections", &self.sections())
            .finish()
    }
}

impl SectionLog for Logging {
    fn logger(&self) -> &Arc<dyn PreparedLogger> {
        &self.logger
    }

    fn info(&self, message: &str, context: Option<&LogFields>) {
        self.logger.info(context, message);
    }

    fn debug(&self, message: &str, context: Option<&LogFields>) {
        self.logger.debug(context, message);
    }

    fn warn(&self, message: &str, context: Option<&LogFields>) {
        self.logger.warn(context, message);
    }

    fn error(&self, message: &str, context: Option<&LogFields>) {
        self.logger.error(context, message);
    }

    fn with_section(&self, section: &str, context: Option<LogFields>) -> Self {
        if self.sections().iter().any(|existing| existing == section) {
            return self.clone();
        }
        make_logging(LoggingOptions {
            logger: Arc::clone(&self.logger),
            section: Some(section.to_string()),
            context,
        })
    }
}

/// Build a facade, deriving a child logger when a new section or context is
/// supplied.
#[must_use]
pub fn make_logging(options: LoggingOptions) -> Logging {
    let LoggingOptions {
        logger,
        section,
        context,
    } = options;
    Logging {
        logger: logger_for(&logger, section.as_deref(), context),
    }
}
