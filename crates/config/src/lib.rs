//! # seclog-config
//!
//! Logging configuration: schema, env parsing and the env + file loader.
//! This crate depends on `ports`, `console` and `shared`.

/// Environment variable parsing.
pub mod env;
/// Config loading helpers (env + file).
pub mod load;
/// Configuration schema types.
pub mod schema;

pub use env::{
    ENV_LOG_COLOUR, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_LOG_REDACT_PATHS, EnvParseError,
    LoggingEnv, apply_env_overrides,
};
pub use load::{
    load_logging_config_from_path, load_logging_config_from_sources,
    load_logging_config_std_env,
};
pub use schema::{ColourSetting, LogFormat, LoggingConfig};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use seclog_console::console_crate_version;
    use seclog_ports::ports_crate_version;
    use seclog_shared::shared_crate_version;

    #[test]
    fn config_crate_compiles() {
        let version = config_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn config_can_use_ports_console_and_shared() {
        assert!(!ports_crate_version().is_empty());
        assert!(!console_crate_version().is_empty());
        assert!(!shared_crate_version().is_empty());
    }
}
