//! Config loading helpers (env + file).
//!
//! The loader is responsible for deterministic merge order and surfacing
//! user-facing errors as typed `ErrorEnvelope`s.

use crate::{ColourSetting, LogFormat, LoggingConfig, LoggingEnv, apply_env_overrides};
use seclog_ports::parse_log_level_or_default;
use seclog_shared::{ErrorCode, ErrorEnvelope, RedactPath};
use serde::Deserialize;
use std::path::Path;

/// Load the logging config from sources using a deterministic precedence order.
///
/// Precedence (highest wins):
/// - env overrides (`LoggingEnv`)
/// - config TOML (file content)
/// - defaults (`LoggingConfig::default()`)
pub fn load_logging_config_from_sources(
    config_toml: Option<&str>,
    env: &LoggingEnv,
) -> Result<LoggingConfig, ErrorEnvelope> {
    let mut config = LoggingConfig::default();
    if let Some(input) = config_toml {
        let file = parse_config_toml(input)?;
        apply_file(&mut config, file)?;
    }

    let config = apply_env_overrides(config, env);
    tracing::debug!(
        level = %config.level,
        format = %config.format,
        colour = %config.colour,
        redact_paths = config.redact_paths.len(),
        "resolved logging config"
    );
    Ok(config)
}

/// Load the logging config from an optional TOML file path.
pub fn load_logging_config_from_path(
    config_path: Option<&Path>,
    env: &LoggingEnv,
) -> Result<LoggingConfig, ErrorEnvelope> {
    let config_text = config_path.map(read_config_file).transpose()?;
    load_logging_config_from_sources(config_text.as_deref(), env)
}

/// Load the logging config from std env and an optional file path.
pub fn load_logging_config_std_env(
    config_path: Option<&Path>,
) -> Result<LoggingConfig, ErrorEnvelope> {
    let env = LoggingEnv::from_std_env().map_err(ErrorEnvelope::from)?;
    load_logging_config_from_path(config_path, &env)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
struct LoggingConfigFile {
    level: Option<String>,
    format: Option<LogFormat>,
    colour: Option<ColourSetting>,
    redact_paths: Option<Vec<String>>,
}

fn parse_config_toml(input: &str) -> Result<LoggingConfigFile, ErrorEnvelope> {
    toml::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_toml"),
            format!("invalid config TOML: {error}"),
        )
        .with_metadata("source", "config")
    })
}

fn apply_file(config: &mut LoggingConfig, file: LoggingConfigFile) -> Result<(), ErrorEnvelope> {
    config.level = parse_log_level_or_default(file.level.as_deref(), config.level)
        .map_err(|error| ErrorEnvelope::from(error).with_metadata("source", "config"))?;
    if let Some(format) = file.format {
        config.format = format;
    }
    if let Some(colour) = file.colour {
        config.colour = colour;
    }
    if let Some(paths) = file.redact_paths {
        if let Some(invalid) = paths.iter().find(|path| RedactPath::parse(path).is_none()) {
            return Err(ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_redact_path"),
                format!("invalid redact path: {invalid}"),
            )
            .with_metadata("source", "config")
            .with_metadata("entry", invalid.clone()));
        }
        config.redact_paths = paths;
    }
    Ok(())
}

fn read_config_file(path: &Path) -> Result<String, ErrorEnvelope> {
    std::fs::read_to_string(path).map_err(|error| {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::new("config", "config_file_not_found"),
            std::io::ErrorKind::PermissionDenied => {
                ErrorCode::new("config", "config_file_permission_denied")
            },
            _ => ErrorCode::new("config", "config_file_io"),
        };

        ErrorEnvelope::expected(code, format!("failed to read config file: {error}"))
            .with_metadata("path", path.to_string_lossy().to_string())
    })
}
