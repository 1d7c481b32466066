//! # seclog-console
//!
//! Terminal helpers: a colour utility factory with a forced-colour and a
//! plain mode, and JSON pretty-printing with optional token colouring.
//! This crate depends on `shared` only.

pub mod colour;
pub mod pretty;

pub use colour::{ColourError, ColourMode, ColourUtils, make_colour_utils};
pub use pretty::{color_pretty_json, colour_pretty_json, pretty_json};

/// Returns the console crate version.
#[must_use]
pub const fn console_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
