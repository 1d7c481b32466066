//! Path-based redaction of structured log payloads.
//!
//! A redact path is a dot-separated list of object keys, for example
//! `req.headers.authorization`. A `*` segment matches every key of an object
//! or every element of an array. Only values that already exist are replaced;
//! redaction never inserts keys.

use serde_json::{Map, Value};
use std::fmt;

/// The redacted placeholder string.
pub const REDACTED: &str = "[REDACTED]";

/// Paths redacted when the caller does not supply any.
pub const DEFAULT_REDACT_PATHS: [&str; 2] = ["req.headers.authorization", "req.headers.cookie"];

const WILDCARD: &str = "*";

/// A single parsed redact path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactPath {
    segments: Vec<Box<str>>,
}

impl RedactPath {
    /// Parse a dot-separated path. Returns `None` for blank input or empty segments.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let segments: Vec<Box<str>> = trimmed
            .split('.')
            .map(|segment| segment.trim().to_owned().into_boxed_str())
            .collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return None;
        }

        Some(Self { segments })
    }

    /// Path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Box<str>] {
        &self.segments
    }

    fn apply_to_object(&self, object: &mut Map<String, Value>) {
        redact_segments(object, &self.segments);
    }
}

impl fmt::Display for RedactPath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.segments.iter().map(AsRef::as_ref).collect();
        formatter.write_str(&joined.join("."))
    }
}

/// A set of redact paths applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedactPaths {
    paths: Vec<RedactPath>,
}

impl RedactPaths {
    /// Build from raw path strings, skipping blank or malformed entries.
    pub fn from_strs<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            paths: paths
                .into_iter()
                .filter_map(|path| RedactPath::parse(path.as_ref()))
                .collect(),
        }
    }

    /// The default header paths (`authorization` and `cookie`).
    #[must_use]
    pub fn defaults() -> Self {
        Self::from_strs(DEFAULT_REDACT_PATHS)
    }

    /// Returns true when no path is configured.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Configured paths.
    #[must_use]
    pub fn paths(&self) -> &[RedactPath] {
        &self.paths
    }

    /// Replace every matching value in the object with [`REDACTED`].
    pub fn apply(&self, object: &mut Map<String, Value>) {
        for path in &self.paths {
            path.apply_to_object(object);
        }
    }

    /// Same as [`RedactPaths::apply`] for an arbitrary value; non-objects are left untouched.
    pub fn apply_value(&self, value: &mut Value) {
        if let Value::Object(object) = value {
            self.apply(object);
        }
    }
}

fn redact_segments(object: &mut Map<String, Value>, segments: &[Box<str>]) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };

    if head.as_ref() == WILDCARD {
        for value in object.values_mut() {
            redact_in_value(value, rest);
        }
        return;
    }

    if let Some(value) = object.get_mut(head.as_ref()) {
        redact_in_value(value, rest);
    }
}

fn redact_in_value(value: &mut Value, rest: &[Box<str>]) {
    if rest.is_empty() {
        *value = Value::String(REDACTED.to_string());
        return;
    }

    match value {
        Value::Object(nested) => redact_segments(nested, rest),
        Value::Array(items) => {
            if rest.first().is_some_and(|segment| segment.as_ref() == WILDCARD) {
                let tail = rest.get(1..).unwrap_or_default();
                for item in items {
                    redact_in_value(item, tail);
                }
            }
        },
        _ => {},
    }
}
