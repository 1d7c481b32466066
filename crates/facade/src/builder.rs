//! Root logger construction from a [`LoggingConfig`].

use crate::logging::{Logging, LoggingOptions, make_logging};
use seclog_adapters::{JsonLogger, StdoutLogSink, TracingLogger, try_init_tracing};
use seclog_config::{LogFormat, LoggingConfig, load_logging_config_std_env};
use seclog_console::{ColourUtils, make_colour_utils};
use seclog_ports::PreparedLogger;
use seclog_shared::ErrorEnvelope;
use std::path::Path;
use std::sync::Arc;

/// Build the root prepared logger described by `config`.
///
/// The tracing format only forwards events; installing a subscriber is left
/// to [`init_logging_std_env`] or the caller.
#[must_use]
pub fn build_logger(config: &LoggingConfig) -> Arc<dyn PreparedLogger> {
    tracing::debug!(level = %config.level, format = %config.format, "building root logger");
    match config.format {
        LogFormat::Json => Arc::new(
            JsonLogger::new(Arc::new(StdoutLogSink))
                .with_level(config.level)
                .with_redact_paths(config.redact_paths()),
        ),
        LogFormat::Tracing => Arc::new(TracingLogger::new(config.level)),
    }
}

/// Facade over the root logger described by `config`.
#[must_use]
pub fn logging_from_config(config: &LoggingConfig) -> Logging {
    make_logging(LoggingOptions::new(build_logger(config)))
}

/// Colour utilities for the configured colour preference.
#[must_use]
pub fn colour_utils_from_config(config: &LoggingConfig) -> ColourUtils {
    make_colour_utils(config.colour.resolve())
}

/// Load config from the process env (and an optional TOML file) and build
/// the root facade. With the tracing format a stderr subscriber is installed
/// unless one is already set.
pub fn init_logging_std_env(config_path: Option<&Path>) -> Result<Logging, ErrorEnvelope> {
    let config = load_logging_config_std_env(config_path)?;
    if config.format == LogFormat::Tracing {
        if let Err(error) = try_init_tracing(config.level, false) {
            tracing::debug!(%error, "keeping existing tracing subscriber");
        }
    }
    Ok(logging_from_config(&config))
}
