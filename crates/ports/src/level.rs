//! Log level set and parser.

use seclog_shared::{ErrorCode, ErrorEnvelope};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log level.
///
/// Numeric values follow the pino convention so JSON output stays compatible
/// with existing log tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum LogLevel {
    /// Fatal.
    Fatal,
    /// Error.
    Error,
    /// Warn.
    Warn,
    /// Info.
    Info,
    /// Debug.
    Debug,
    /// Trace.
    Trace,
    /// Suppresses every event.
    Silent,
}

/// Allowed log levels, in declaration order.
pub const LOG_LEVELS: [LogLevel; 7] = [
    LogLevel::Fatal,
    LogLevel::Error,
    LogLevel::Warn,
    LogLevel::Info,
    LogLevel::Debug,
    LogLevel::Trace,
    LogLevel::Silent,
];

impl LogLevel {
    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::Silent => "silent",
        }
    }

    /// Numeric severity (higher is more severe). `Silent` is `u32::MAX`.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Fatal => 60,
            Self::Error => 50,
            Self::Warn => 40,
            Self::Info => 30,
            Self::Debug => 20,
            Self::Trace => 10,
            Self::Silent => u32::MAX,
        }
    }

    /// Whether a logger at this level emits events at `event_level`.
    ///
    /// Events are never emitted at `Silent`, whatever the threshold.
    #[must_use]
    pub const fn enables(self, event_level: Self) -> bool {
        !matches!(event_level, Self::Silent) && event_level.value() >= self.value()
    }

    /// Parse a level name, case-insensitively.
    pub fn parse(input: &str) -> Result<Self, LevelError> {
        let lower = input.to_lowercase();
        LOG_LEVELS
            .into_iter()
            .find(|level| level.as_str() == lower)
            .ok_or_else(|| LevelError::InvalidLevel {
                input: input.to_string(),
            })
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl TryFrom<String> for LogLevel {
    type Error = LevelError;

    fn try_from(value: String) -> Result<Self, LevelError> {
        Self::parse(&value)
    }
}

impl From<LogLevel> for &'static str {
    fn from(level: LogLevel) -> Self {
        level.as_str()
    }
}

/// Parse the given level, or return `default_level` when it is absent or empty.
///
/// Any other value outside [`LOG_LEVELS`] is rejected with
/// [`LevelError::InvalidLevel`], carrying the raw input.
pub fn parse_log_level_or_default(
    level: Option<&str>,
    default_level: LogLevel,
) -> Result<LogLevel, LevelError> {
    match level {
        None | Some("") => Ok(default_level),
        Some(raw) => LogLevel::parse(raw),
    }
}

/// Level parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// The value is not one of the known level names.
    InvalidLevel {
        /// Raw input, before lowercasing.
        input: String,
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLevel { input } => write!(formatter, "Invalid log level: {input}"),
        }
    }
}

impl std::error::Error for LevelError {}

impl From<LevelError> for ErrorEnvelope {
    fn from(error: LevelError) -> Self {
        let message = error.to_string();
        match error {
            LevelError::InvalidLevel { input } => {
                Self::expected(ErrorCode::new("ports", "invalid_log_level"), message)
                    .with_metadata("input", input)
            },
        }
    }
}
