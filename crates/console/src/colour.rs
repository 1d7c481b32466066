//! Colour utility factory.
//!
//! `with-colour` always emits ANSI styling, whatever the terminal reports;
//! use [`ColourMode::detect`] to pick a mode from the environment.

use console::Style;
use seclog_shared::{ErrorCode, ErrorEnvelope};
use std::fmt;
use std::str::FromStr;

/// Colour output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColourMode {
    /// Wrap text in ANSI colour codes.
    WithColour,
    /// Return text unchanged.
    Plain,
}

impl ColourMode {
    /// Canonical mode string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WithColour => "with-colour",
            Self::Plain => "plain",
        }
    }

    /// Parse a mode string. Only the exact canonical spellings are accepted.
    pub fn parse(input: &str) -> Result<Self, ColourError> {
        match input {
            "with-colour" => Ok(Self::WithColour),
            "plain" => Ok(Self::Plain),
            _ => Err(ColourError::UnknownMode {
                input: input.to_string(),
            }),
        }
    }

    /// Choose a mode from stderr's terminal capabilities (`NO_COLOR`,
    /// `CLICOLOR_FORCE` and TTY detection).
    #[must_use]
    pub fn detect() -> Self {
        if console::colors_enabled_stderr() {
            Self::WithColour
        } else {
            Self::Plain
        }
    }
}

impl fmt::Display for ColourMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ColourMode {
    type Err = ColourError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

/// Colour mode failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    /// Mode string is neither `with-colour` nor `plain`.
    UnknownMode {
        /// Rejected input.
        input: String,
    },
}

impl fmt::Display for ColourError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMode { input } => write!(formatter, "Unknown mode: {input}"),
        }
    }
}

impl std::error::Error for ColourError {}

impl From<ColourError> for ErrorEnvelope {
    fn from(error: ColourError) -> Self {
        let message = error.to_string();
        match error {
            ColourError::UnknownMode { input } => {
                Self::expected(ErrorCode::new("console", "unknown_colour_mode"), message)
                    .with_metadata("input", input)
            },
        }
    }
}

/// Six text colouring functions bound to one [`ColourMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourUtils {
    mode: ColourMode,
}

impl ColourUtils {
    /// Build utilities from a mode string.
    pub fn from_mode_str(mode: &str) -> Result<Self, ColourError> {
        ColourMode::parse(mode).map(make_colour_utils)
    }

    /// Mode these utilities were built with.
    #[must_use]
    pub const fn mode(&self) -> ColourMode {
        self.mode
    }

    /// Blue text.
    #[must_use]
    pub fn blue(&self, text: &str) -> String {
        self.paint(Style::new().blue(), text)
    }

    /// Cyan text.
    #[must_use]
    pub fn cyan(&self, text: &str) -> String {
        self.paint(Style::new().cyan(), text)
    }

    /// Gray (bright black) text.
    #[must_use]
    pub fn gray(&self, text: &str) -> String {
        self.paint(Style::new().black().bright(), text)
    }

    /// Magenta text.
    #[must_use]
    pub fn magenta(&self, text: &str) -> String {
        self.paint(Style::new().magenta(), text)
    }

    /// Red text.
    #[must_use]
    pub fn red(&self, text: &str) -> String {
        self.paint(Style::new().red(), text)
    }

    /// Yellow text.
    #[must_use]
    pub fn yellow(&self, text: &str) -> String {
        self.paint(Style::new().yellow(), text)
    }

    /// Green text, used for JSON numbers.
    pub(crate) fn green(&self, text: &str) -> String {
        self.paint(Style::new().green(), text)
    }

    fn paint(self, style: Style, text: &str) -> String {
        match self.mode {
            ColourMode::WithColour => style.force_styling(true).apply_to(text).to_string(),
            ColourMode::Plain => text.to_string(),
        }
    }
}

/// Build colour utilities for `mode`.
#[must_use]
pub const fn make_colour_utils(mode: ColourMode) -> ColourUtils {
    ColourUtils { mode }
}
