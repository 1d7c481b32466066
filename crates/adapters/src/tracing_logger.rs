//! Bridge from the prepared-logger capability into `tracing`.

use seclog_ports::{
    LogEvent, LogFields, LogLevel, PreparedLogger, merge_fields, sections_from_bindings,
};
use seclog_shared::{ErrorClass, ErrorCode, ErrorEnvelope};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Target used for every bridged event.
pub const TRACING_TARGET: &str = "seclog";

/// Logger forwarding events to the active `tracing` subscriber.
///
/// Bindings and event context are merged and rendered as a single JSON
/// `fields` value; the section list is also exposed as a dotted `sections`
/// field for easy filtering.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    level: LogLevel,
    bindings: LogFields,
}

impl TracingLogger {
    /// Create a tracing logger with the given minimum level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self {
            level,
            bindings: LogFields::new(),
        }
    }

    /// Set base bindings applied to every event.
    #[must_use]
    pub fn with_bindings(mut self, bindings: LogFields) -> Self {
        self.bindings = bindings;
        self
    }
}

impl PreparedLogger for TracingLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn log(&self, event: LogEvent) {
        if !self.level.enables(event.level) {
            return;
        }

        let merged = match event.fields {
            Some(fields) => merge_fields(&self.bindings, fields),
            None => self.bindings.clone(),
        };
        let sections = sections_from_bindings(&merged).join(".");
        let fields = serde_json::to_string(&merged).unwrap_or_else(|_| "{}".to_string());
        let message = event.message;

        match event.level {
            LogLevel::Fatal | LogLevel::Error => {
                tracing::error!(target: TRACING_TARGET, sections = %sections, fields = %fields, "{message}");
            },
            LogLevel::Warn => {
                tracing::warn!(target: TRACING_TARGET, sections = %sections, fields = %fields, "{message}");
            },
            LogLevel::Info => {
                tracing::info!(target: TRACING_TARGET, sections = %sections, fields = %fields, "{message}");
            },
            LogLevel::Debug => {
                tracing::debug!(target: TRACING_TARGET, sections = %sections, fields = %fields, "{message}");
            },
            LogLevel::Trace => {
                tracing::trace!(target: TRACING_TARGET, sections = %sections, fields = %fields, "{message}");
            },
            LogLevel::Silent => {},
        }
    }

    fn bindings(&self) -> LogFields {
        self.bindings.clone()
    }

    fn child(&self, bindings: LogFields) -> Arc<dyn PreparedLogger> {
        Arc::new(Self {
            level: self.level,
            bindings: merge_fields(&self.bindings, bindings),
        })
    }
}

/// Map a log level onto the closest `tracing` filter.
#[must_use]
pub const fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Fatal | LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Silent => LevelFilter::OFF,
    }
}

/// Install a global fmt subscriber writing to stderr.
///
/// `RUST_LOG` directives take precedence over `level`. Fails when a global
/// subscriber is already set.
pub fn try_init_tracing(level: LogLevel, json: bool) -> Result<(), ErrorEnvelope> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_filter(level).into())
        .from_env_lossy();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("adapters", "tracing_init"),
            format!("failed to install tracing subscriber: {error}"),
            ErrorClass::NonRetriable,
        )
    })
}
