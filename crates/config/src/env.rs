//! Environment variable parsing and env-to-config merging.
//!
//! Env parsing is strict: a set variable with an invalid value fails fast
//! instead of silently falling back.

use crate::schema::{ColourSetting, LogFormat, LoggingConfig};
use seclog_ports::LogLevel;
use seclog_shared::{ErrorCode, ErrorEnvelope, RedactPath};
use std::collections::BTreeMap;
use std::fmt;

/// Env var: minimum log level.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Env var: output format (`json` or `tracing`).
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
/// Env var: colour preference (`with-colour`, `plain` or `auto`).
pub const ENV_LOG_COLOUR: &str = "LOG_COLOUR";
/// Env var: comma-separated redact paths.
pub const ENV_LOG_REDACT_PATHS: &str = "LOG_REDACT_PATHS";

/// Parsed logging env overrides. `None` means the variable was unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingEnv {
    /// Level override.
    pub level: Option<LogLevel>,
    /// Format override.
    pub format: Option<LogFormat>,
    /// Colour override.
    pub colour: Option<ColourSetting>,
    /// Redact path override; an empty list disables redaction.
    pub redact_paths: Option<Vec<String>>,
}

impl LoggingEnv {
    /// Parse overrides from an explicit variable map.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        Ok(Self {
            level: parse_optional_level(map, ENV_LOG_LEVEL)?,
            format: parse_optional_enum(map, ENV_LOG_FORMAT, LogFormat::parse)?,
            colour: parse_optional_enum(map, ENV_LOG_COLOUR, ColourSetting::parse)?,
            redact_paths: parse_optional_csv_paths(map, ENV_LOG_REDACT_PATHS)?,
        })
    }

    /// Parse overrides from the process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let mut map = BTreeMap::new();
        for name in [
            ENV_LOG_LEVEL,
            ENV_LOG_FORMAT,
            ENV_LOG_COLOUR,
            ENV_LOG_REDACT_PATHS,
        ] {
            if let Ok(value) = std::env::var(name) {
                map.insert(name.to_string(), value);
            }
        }
        Self::from_map(&map)
    }
}

/// Apply env overrides on top of `config`.
#[must_use]
pub fn apply_env_overrides(mut config: LoggingConfig, env: &LoggingEnv) -> LoggingConfig {
    if let Some(level) = env.level {
        config.level = level;
    }
    if let Some(format) = env.format {
        config.format = format;
    }
    if let Some(colour) = env.colour {
        config.colour = colour;
    }
    if let Some(paths) = &env.redact_paths {
        config.redact_paths.clone_from(paths);
    }
    config
}

/// Env parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvParseError {
    /// Level is not one of the known names.
    InvalidLevel {
        /// Env var name.
        var: &'static str,
        /// Raw value.
        value: String,
    },
    /// Value is not one of the allowed choices.
    InvalidEnum {
        /// Env var name.
        var: &'static str,
        /// Raw value.
        value: String,
    },
    /// CSV contained a malformed redact path.
    InvalidRedactPath {
        /// Env var name.
        var: &'static str,
        /// Invalid entry.
        entry: String,
    },
}

impl EnvParseError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidLevel { .. } => ErrorCode::new("config", "invalid_env_level"),
            Self::InvalidEnum { .. } => ErrorCode::new("config", "invalid_env_enum"),
            Self::InvalidRedactPath { .. } => ErrorCode::new("config", "invalid_env_csv"),
        }
    }
}

impl fmt::Display for EnvParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLevel { var, value } => {
                write!(formatter, "{var}: Invalid log level: {value}")
            },
            Self::InvalidEnum { var, .. } => write!(formatter, "{var} has an unsupported value"),
            Self::InvalidRedactPath { var, entry } => {
                write!(formatter, "{var} contains invalid redact path: {entry}")
            },
        }
    }
}

impl std::error::Error for EnvParseError {}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        let envelope = Self::expected(code, message);

        match error {
            EnvParseError::InvalidLevel { var, value } | EnvParseError::InvalidEnum { var, value } => {
                envelope
                    .with_metadata("env_var", var)
                    .with_metadata("value", value)
            },
            EnvParseError::InvalidRedactPath { var, entry } => envelope
                .with_metadata("env_var", var)
                .with_metadata("entry", entry),
        }
    }
}

fn non_blank<'a>(map: &'a BTreeMap<String, String>, var: &str) -> Option<&'a str> {
    map.get(var)
        .map(|raw| raw.trim())
        .filter(|trimmed| !trimmed.is_empty())
}

fn parse_optional_level(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<LogLevel>, EnvParseError> {
    let Some(raw) = non_blank(map, var) else {
        return Ok(None);
    };
    LogLevel::parse(raw)
        .map(Some)
        .map_err(|_| EnvParseError::InvalidLevel {
            var,
            value: raw.to_string(),
        })
}

fn parse_optional_enum<T>(
    map: &BTreeMap<String, String>,
    var: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, EnvParseError> {
    let Some(raw) = non_blank(map, var) else {
        return Ok(None);
    };
    parse(raw).map(Some).ok_or_else(|| EnvParseError::InvalidEnum {
        var,
        value: raw.to_string(),
    })
}

fn parse_optional_csv_paths(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<Vec<String>>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };

    let mut paths = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        if RedactPath::parse(entry).is_none() {
            return Err(EnvParseError::InvalidRedactPath {
                var,
                entry: entry.to_string(),
            });
        }
        paths.push(entry.to_string());
    }
    Ok(Some(paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn env_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_has_no_overrides() -> Result<(), Box<dyn Error>> {
        let env = LoggingEnv::from_map(&BTreeMap::new())?;
        assert_eq!(env, LoggingEnv::default());
        Ok(())
    }

    #[test]
    fn values_are_parsed() -> Result<(), Box<dyn Error>> {
        let env = LoggingEnv::from_map(&env_map(&[
            (ENV_LOG_LEVEL, "DEBUG"),
            (ENV_LOG_FORMAT, "tracing"),
            (ENV_LOG_COLOUR, "auto"),
            (ENV_LOG_REDACT_PATHS, " user.password , ,req.*.token"),
        ]))?;

        assert_eq!(env.level, Some(LogLevel::Debug));
        assert_eq!(env.format, Some(LogFormat::Tracing));
        assert_eq!(env.colour, Some(ColourSetting::Auto));
        assert_eq!(
            env.redact_paths,
            Some(vec!["user.password".to_string(), "req.*.token".to_string()])
        );
        Ok(())
    }

    #[test]
    fn blank_level_is_treated_as_unset() -> Result<(), Box<dyn Error>> {
        let env = LoggingEnv::from_map(&env_map(&[(ENV_LOG_LEVEL, "  ")]))?;
        assert_eq!(env.level, None);
        Ok(())
    }

    #[test]
    fn empty_redact_csv_disables_redaction() -> Result<(), Box<dyn Error>> {
        let env = LoggingEnv::from_map(&env_map(&[(ENV_LOG_REDACT_PATHS, "")]))?;
        assert_eq!(env.redact_paths, Some(Vec::new()));

        let config = apply_env_overrides(LoggingConfig::default(), &env);
        assert!(config.redact_paths().is_empty());
        Ok(())
    }

    #[test]
    fn invalid_values_fail_fast() {
        let level = LoggingEnv::from_map(&env_map(&[(ENV_LOG_LEVEL, "loud")])).err();
        assert_eq!(
            level,
            Some(EnvParseError::InvalidLevel {
                var: ENV_LOG_LEVEL,
                value: "loud".to_string()
            })
        );

        let format = LoggingEnv::from_map(&env_map(&[(ENV_LOG_FORMAT, "xml")])).err();
        assert!(matches!(format, Some(EnvParseError::InvalidEnum { .. })));

        let paths = LoggingEnv::from_map(&env_map(&[(ENV_LOG_REDACT_PATHS, "a..b")])).err();
        assert!(matches!(
            paths,
            Some(EnvParseError::InvalidRedactPath { ref entry, .. }) if entry == "a..b"
        ));
    }

    #[test]
    fn errors_convert_to_config_envelopes() {
        let envelope = ErrorEnvelope::from(EnvParseError::InvalidEnum {
            var: ENV_LOG_COLOUR,
            value: "rainbow".to_string(),
        });
        assert_eq!(envelope.code, ErrorCode::new("config", "invalid_env_enum"));
        assert_eq!(
            envelope.metadata.get("env_var").map(String::as_str),
            Some(ENV_LOG_COLOUR)
        );
        assert_eq!(
            envelope.metadata.get("value").map(String::as_str),
            Some("rainbow")
        );
    }

    #[test]
    fn overrides_replace_only_set_fields() {
        let env = LoggingEnv {
            level: Some(LogLevel::Warn),
            ..LoggingEnv::default()
        };
        let config = apply_env_overrides(LoggingConfig::default(), &env);
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.redact_paths, LoggingConfig::default().redact_paths);
    }
}
