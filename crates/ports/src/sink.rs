//! Line sink boundary for transport-backed loggers.

/// A sink that receives pre-formatted log lines.
pub trait LogSink: Send + Sync {
    /// Write a line to the sink. Lines carry their own trailing newline.
    fn write_line(&self, line: &str);
}
