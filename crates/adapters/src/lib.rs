//! # seclog-adapters
//!
//! Concrete implementations of the prepared-logger capability: a JSON-lines
//! logger over a line sink, a bridge into `tracing`, and a no-op sink logger
//! for tests. This crate depends on `ports` and `shared`.

pub mod log_sink;
pub mod logger;
pub mod sink_logger;
pub mod tracing_logger;

pub use log_sink::StdoutLogSink;
pub use logger::{JsonLogger, build_json_logger};
pub use sink_logger::{SinkLogger, build_sink_logger};
pub use tracing_logger::{TRACING_TARGET, TracingLogger, level_filter, try_init_tracing};

/// Returns the adapters crate version.
#[must_use]
pub const fn adapters_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
