//! Section derivation on top of a prepared logger.

use seclog_ports::{LogFields, PreparedLogger, SECTIONS_KEY, sections_from_bindings};
use std::sync::Arc;

/// Whether `logger` already declares `section` in its bindings.
pub fn logger_has_section(logger: &dyn PreparedLogger, section: &str) -> bool {
    sections_from_bindings(&logger.bindings())
        .iter()
        .any(|existing| existing == section)
}

/// Derive the logger a facade wraps.
///
/// Without context, the given logger is reused when no section is requested
/// or the section is already declared. Otherwise a child is created with the
/// context as bindings, plus the extended section list when a section is
/// given (appended even if already present). An empty section name counts
/// as no section.
pub fn logger_for(
    given: &Arc<dyn PreparedLogger>,
    section: Option<&str>,
    context: Option<LogFields>,
) -> Arc<dyn PreparedLogger> {
    let section = section.filter(|section| !section.is_empty());
    let reuse = match section {
        None => context.is_none(),
        Some(section) => context.is_none() && logger_has_section(given.as_ref(), section),
    };
    if reuse {
        return Arc::clone(given);
    }

    let mut bindings = context.unwrap_or_default();
    if let Some(section) = section {
        let mut sections = sections_from_bindings(&given.bindings());
        sections.push(section.to_string());
        bindings.insert(SECTIONS_KEY.into(), serde_json::Value::from(sections));
    }
    given.child(bindings)
}
