//! Small builders for test inputs.

use seclog_ports::LogFields;
use serde_json::Value;

/// Convert a JSON object literal into [`LogFields`].
///
/// Panics when `value` is not an object.
pub fn log_fields(value: Value) -> LogFields {
    match value {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| (key.into_boxed_str(), value))
            .collect(),
        other => panic!("log_fields expects a JSON object, got {other}"),
    }
}
