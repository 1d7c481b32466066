//! Line sinks for transport-backed loggers.

use seclog_ports::LogSink;
use std::io::Write;

/// Log sink that writes to stdout.
#[derive(Debug, Default)]
pub struct StdoutLogSink;

impl LogSink for StdoutLogSink {
    fn write_line(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(error) = stdout.write_all(line.as_bytes()) {
            eprintln!("log sink write failed: {error}");
        }
    }
}
