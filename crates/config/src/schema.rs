//! Logging configuration schema.

use seclog_console::ColourMode;
use seclog_ports::LogLevel;
use seclog_shared::{DEFAULT_REDACT_PATHS, RedactPaths};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output format of the root logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line on stdout.
    #[default]
    Json,
    /// Events forwarded to the `tracing` subscriber.
    Tracing,
}

impl LogFormat {
    /// Return the canonical config string for this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Tracing => "tracing",
        }
    }

    /// Parse a format from user or env input.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "tracing" => Some(Self::Tracing),
            _ => None,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Colour preference; `auto` defers to terminal detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColourSetting {
    /// Always colour.
    WithColour,
    /// Never colour.
    #[default]
    Plain,
    /// Colour when stderr is a capable terminal.
    Auto,
}

impl ColourSetting {
    /// Return the canonical config string for this setting.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WithColour => "with-colour",
            Self::Plain => "plain",
            Self::Auto => "auto",
        }
    }

    /// Parse a colour setting from user or env input.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "with-colour" => Some(Self::WithColour),
            "plain" => Some(Self::Plain),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    /// Resolve to a concrete colour mode.
    #[must_use]
    pub fn resolve(self) -> ColourMode {
        match self {
            Self::WithColour => ColourMode::WithColour,
            Self::Plain => ColourMode::Plain,
            Self::Auto => ColourMode::detect(),
        }
    }
}

impl fmt::Display for ColourSetting {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Effective logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Minimum level of the root logger.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Colour preference for console helpers.
    pub colour: ColourSetting,
    /// Dot paths redacted by the JSON logger.
    pub redact_paths: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::default(),
            colour: ColourSetting::default(),
            redact_paths: DEFAULT_REDACT_PATHS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl LoggingConfig {
    /// Compile the configured redact paths.
    #[must_use]
    pub fn redact_paths(&self) -> RedactPaths {
        RedactPaths::from_strs(&self.redact_paths)
    }
}
