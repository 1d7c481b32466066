//! # seclog-ports
//!
//! Boundary types for the seclog workspace: the fixed log level set with its
//! parser, the prepared-logger capability every concrete logger satisfies, and
//! the line sink transport loggers write to.
//! This crate depends only on `shared`.

/// Returns the ports crate version.
#[must_use]
pub const fn ports_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub mod level;
pub mod logger;
pub mod sink;

pub use level::*;
pub use logger::*;
pub use sink::*;
