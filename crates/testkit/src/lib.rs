//! # seclog-testkit
//!
//! Test helpers and in-memory loggers.
//! This crate depends on `ports` only.

pub mod fixtures;
pub mod in_memory;

pub use fixtures::log_fields;
pub use in_memory::{CapturedEvent, CapturingLogger, MemoryLogSink, PanickingLogger};

/// Returns the testkit crate version.
#[must_use]
pub const fn testkit_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use seclog_ports::ports_crate_version;

    #[test]
    fn testkit_can_use_ports() {
        assert!(!testkit_crate_version().is_empty());
        assert!(!ports_crate_version().is_empty());
    }

    #[test]
    fn in_memory_doubles_are_available() {
        let _ = MemoryLogSink::default();
        let _ = PanickingLogger::default();
    }
}
