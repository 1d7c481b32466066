//! # seclog-facade
//!
//! Section-aware logging facade and its recording decorator.
//!
//! A [`Logging`] wraps a prepared logger and tags it with an ordered list of
//! sections (stored under the `logSections` binding). A
//! [`LoggingWithRecords`] additionally appends every message to a
//! [`MessageLedger`] shared by all instances derived from it, so tests can
//! assert on what was logged.
//!
//! This crate depends on `adapters`, `config`, `console`, `ports` and `shared`.

pub mod builder;
pub mod logging;
pub mod recording;
pub mod sections;
pub mod variant;

pub use builder::{build_logger, colour_utils_from_config, init_logging_std_env, logging_from_config};
pub use logging::{Logging, LoggingOptions, SectionLog, make_logging};
pub use recording::{
    LoggingWithRecords, LoggingWithRecordsOptions, MessageLedger, MessageLevel, Messages,
    RecordedMessage, make_logging_with_record,
};
pub use sections::{logger_for, logger_has_section};
pub use variant::{AnyLogging, is_logging_with_records};

pub use seclog_adapters::{build_json_logger, build_sink_logger};
pub use seclog_console::{
    ColourError, ColourMode, ColourUtils, color_pretty_json, colour_pretty_json,
    make_colour_utils, pretty_json,
};
pub use seclog_ports::{
    LOG_LEVELS, LevelError, LogFields, LogLevel, PreparedLogger, SECTIONS_KEY,
    parse_log_level_or_default,
};

/// Returns the facade crate version.
#[must_use]
pub const fn facade_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_crate_compiles() {
        assert!(!facade_crate_version().is_empty());
    }
}
