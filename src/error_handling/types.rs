//! Modes, correctable input errors and the actions taken on them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error handling mode.
///
/// Controls how the validator treats input that is almost, but not quite,
/// a clean variant description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorMode {
    /// Use the input verbatim. Stray whitespace is a syntax error.
    #[default]
    Strict,
    /// Correct stray whitespace and record a warning for each correction.
    Lenient,
    /// Correct stray whitespace without warnings.
    Silent,
}

impl ErrorMode {
    /// Action for an error type that has no override
    pub fn default_action(&self) -> Action {
        match self {
            ErrorMode::Strict => Action::Reject,
            ErrorMode::Lenient => Action::Warn,
            ErrorMode::Silent => Action::Ignore,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorMode::Strict => "strict",
            ErrorMode::Lenient => "lenient",
            ErrorMode::Silent => "silent",
        }
    }
}

impl fmt::Display for ErrorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Correctable input error, identified by a warning code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Leading or trailing whitespace: ` c.76A>T `
    SurroundingWhitespace,
    /// Whitespace around multi-variant brackets and separators:
    /// `p.[Trp24Cys; Lys23_Val25del]`
    SeparatorWhitespace,
}

impl ErrorType {
    pub const ALL: [ErrorType; 2] = [ErrorType::SurroundingWhitespace, ErrorType::SeparatorWhitespace];

    /// Warning code, e.g. `W2001`
    pub fn code(&self) -> &'static str {
        match self {
            ErrorType::SurroundingWhitespace => "W2001",
            ErrorType::SeparatorWhitespace => "W2002",
        }
    }

    /// Look up an error type by its warning code, ignoring case
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code))
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorType::SurroundingWhitespace => "surrounding whitespace",
            ErrorType::SeparatorWhitespace => "whitespace around multi-variant separator",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.code())
    }
}

/// What to do with a detected error, either as a per-type override or as
/// resolved from the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Fail with `UnsupportedSyntax`.
    Reject,
    /// Correct and record a warning.
    Warn,
    /// Correct silently.
    Ignore,
    /// Leave the input untouched and let the grammar decide.
    Accept,
}

impl Action {
    pub fn corrects(&self) -> bool {
        matches!(self, Action::Warn | Action::Ignore)
    }
}

/// Handling of the enrich-style `_wt` and `_sy` markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacyTokenPolicy {
    /// Reject with a hint naming the current notation.
    #[default]
    Reject,
    /// Accept as whole events.
    Accept,
}

impl fmt::Display for LegacyTokenPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegacyTokenPolicy::Reject => write!(f, "reject"),
            LegacyTokenPolicy::Accept => write!(f, "accept"),
        }
    }
}
