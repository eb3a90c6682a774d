//! Error types for hgvs-validate
//!
//! This module provides:
//! - [`ValidationError`], the structured rejection returned by every validator
//! - Error codes for categorization
//! - Source span tracking for the offending substring
//! - Diagnostic messages with hints

use std::fmt;
use thiserror::Error;

/// Error codes for categorizing rejections
///
/// These codes are stable and can be used for programmatic error handling
/// and for documentation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Syntax errors (E1xxx)
    /// Input does not match any supported grammar
    UnsupportedSyntax = 1001,
    /// Unknown level prefix
    UnsupportedPrefix = 1002,
    /// Token is not a position
    MalformedPosition = 1003,
    /// Multi-variant member does not match the level grammar
    InvalidEvent = 1004,
    /// Multi-variant member repeated
    DuplicateEvent = 1005,
    /// Empty input
    EmptyInput = 1006,

    // Semantic errors (E2xxx)
    /// Reference allele equals the new allele
    RefEqualsNew = 2001,
    /// Interval start does not precede its end
    UnorderedInterval = 2002,
    /// Insertion between non-adjacent positions
    NonFlankingInsertion = 2003,
    /// Stop codon immediately before a frame-shift
    StopBeforeFrameShift = 2004,
    /// Deletion at an unknown position without the deleted residue
    MissingDeletedResidue = 2005,

    // Column errors (E3xxx)
    /// Variant prefix not allowed in the column
    ColumnMismatch = 3001,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }

    /// Get a brief description of this error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnsupportedSyntax => "unsupported variant syntax",
            ErrorCode::UnsupportedPrefix => "unsupported level prefix",
            ErrorCode::MalformedPosition => "malformed position",
            ErrorCode::InvalidEvent => "invalid event in multi-variant",
            ErrorCode::DuplicateEvent => "duplicate event in multi-variant",
            ErrorCode::EmptyInput => "empty input",
            ErrorCode::RefEqualsNew => "reference equals new allele",
            ErrorCode::UnorderedInterval => "interval start does not precede end",
            ErrorCode::NonFlankingInsertion => "insertion site is not flanking",
            ErrorCode::StopBeforeFrameShift => "stop codon before frame-shift",
            ErrorCode::MissingDeletedResidue => "deleted residue required at unknown position",
            ErrorCode::ColumnMismatch => "variant not allowed in column",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A span in the source input indicating error location
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceSpan {
    /// Starting byte offset (0-indexed)
    pub start: usize,
    /// Ending byte offset (exclusive)
    pub end: usize,
}

impl SourceSpan {
    /// Create a new source span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span of the last occurrence of `needle` in `haystack`
    pub fn locate(haystack: &str, needle: &str) -> Option<Self> {
        if needle.is_empty() {
            return None;
        }
        haystack
            .rfind(needle)
            .map(|start| Self::new(start, start + needle.len()))
    }

    /// Format the source with the error highlighted
    ///
    /// Returns a string like:
    /// ```text
    /// p.[Trp24Cys;Trp24Cys]
    ///             ^~~~~~~~
    /// ```
    pub fn highlight(&self, source: &str) -> String {
        if source.is_empty() {
            return String::new();
        }

        let safe_start = self.start.min(source.len());
        let safe_end = self.end.min(source.len()).max(safe_start);

        let mut pointer = String::with_capacity(source.len() + 4);
        for _ in 0..safe_start {
            pointer.push(' ');
        }
        pointer.push('^');
        for _ in (safe_start + 1)..safe_end {
            pointer.push('~');
        }

        format!("{}\n{}", source, pointer)
    }
}

/// Diagnostic information for an error
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagnostic {
    /// Error code
    pub code: Option<ErrorCode>,
    /// Source span for highlighting
    pub span: Option<SourceSpan>,
    /// The original input (for error display)
    pub source: Option<String>,
    /// Helpful hint
    pub hint: Option<String>,
    /// "Did you mean?" suggestion
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new empty diagnostic
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error code
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a source span
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Add the original source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Add a hint
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Format the diagnostic as a detailed error message
    pub fn format(&self, primary_message: &str) -> String {
        let mut result = String::new();

        if let Some(code) = &self.code {
            result.push_str(&format!("[{}] ", code));
        }

        result.push_str(primary_message);

        if let (Some(span), Some(source)) = (&self.span, &self.source) {
            result.push_str("\n\n");
            result.push_str(&span.highlight(source));
        }

        if let Some(hint) = &self.hint {
            result.push_str("\n\nHint: ");
            result.push_str(hint);
        }

        if let Some(suggestion) = &self.suggestion {
            result.push_str("\n\nDid you mean: ");
            result.push_str(suggestion);
        }

        result
    }
}

/// Semantic rule broken by a grammatically valid event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticReason {
    /// Substitution whose reference and new allele are identical
    RefEqualsNew,
    /// Interval whose start does not strictly precede its end
    UnorderedInterval,
    /// Insertion whose interval is not two adjacent positions
    NonFlankingInsertion,
    /// Frame-shift whose new amino acid before `fs` is a stop
    StopBeforeFrameShift,
    /// Single-site deletion at `?` without the deleted base or residue
    MissingDeletedResidue,
}

impl SemanticReason {
    pub fn code(&self) -> ErrorCode {
        match self {
            SemanticReason::RefEqualsNew => ErrorCode::RefEqualsNew,
            SemanticReason::UnorderedInterval => ErrorCode::UnorderedInterval,
            SemanticReason::NonFlankingInsertion => ErrorCode::NonFlankingInsertion,
            SemanticReason::StopBeforeFrameShift => ErrorCode::StopBeforeFrameShift,
            SemanticReason::MissingDeletedResidue => ErrorCode::MissingDeletedResidue,
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            SemanticReason::RefEqualsNew => {
                "describe an unchanged allele as silent, e.g. '54=' or 'Cys188='"
            }
            SemanticReason::UnorderedInterval => "write the 5' (N-terminal) position first",
            SemanticReason::NonFlankingInsertion => {
                "an insertion is described between two adjacent positions, e.g. '169_170insA'"
            }
            SemanticReason::StopBeforeFrameShift => {
                "a stop codon cannot shift the frame; describe it as a substitution"
            }
            SemanticReason::MissingDeletedResidue => "name the deleted base, e.g. '?delT'",
        }
    }
}

impl fmt::Display for SemanticReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SemanticReason::RefEqualsNew => "reference and new allele are identical",
            SemanticReason::UnorderedInterval => "interval start does not precede its end",
            SemanticReason::NonFlankingInsertion => {
                "insertion site is not a pair of flanking positions"
            }
            SemanticReason::StopBeforeFrameShift => {
                "amino acid preceding 'fs' cannot be 'Ter' or '*'"
            }
            SemanticReason::MissingDeletedResidue => {
                "deletion at an unknown position must name the deleted base or residue"
            }
        };
        write!(f, "{}", msg)
    }
}

/// Structured rejection of a variant description
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Input matches no supported grammar
    #[error("'{input}' is not a supported syntax: {hint}")]
    UnsupportedSyntax { input: String, hint: String },

    /// Leading level character is not one of `c n g m r p`
    #[error("'{input}' has unsupported level prefix '{prefix}.'")]
    UnsupportedPrefix { input: String, prefix: String },

    /// A multi-variant repeats a member
    #[error("Duplicate event '{event}' in multi-variant '{input}'")]
    DuplicateEvent { input: String, event: String },

    /// A multi-variant member fails the level grammar
    #[error("Invalid event '{event}' in multi-variant '{input}'")]
    InvalidEvent { input: String, event: String },

    /// Token is not a position
    #[error("'{token}' is not a valid position")]
    MalformedPosition { token: String },

    /// Event is well-formed but breaks a semantic rule
    #[error("Invalid variant '{event}': {reason}")]
    SemanticViolation {
        event: String,
        reason: SemanticReason,
    },

    /// Value does not belong in a score-set column
    #[error("'{input}' is not allowed in the {column} column, expected {expected}")]
    ColumnMismatch {
        input: String,
        column: String,
        expected: String,
    },

    /// Nothing to validate
    #[error("Empty input")]
    EmptyInput,
}

impl ValidationError {
    pub(crate) fn unsupported(input: impl Into<String>, hint: impl Into<String>) -> Self {
        ValidationError::UnsupportedSyntax {
            input: input.into(),
            hint: hint.into(),
        }
    }

    pub(crate) fn semantic(event: impl Into<String>, reason: SemanticReason) -> Self {
        ValidationError::SemanticViolation {
            event: event.into(),
            reason,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::UnsupportedSyntax { .. } => ErrorCode::UnsupportedSyntax,
            ValidationError::UnsupportedPrefix { .. } => ErrorCode::UnsupportedPrefix,
            ValidationError::DuplicateEvent { .. } => ErrorCode::DuplicateEvent,
            ValidationError::InvalidEvent { .. } => ErrorCode::InvalidEvent,
            ValidationError::MalformedPosition { .. } => ErrorCode::MalformedPosition,
            ValidationError::SemanticViolation { reason, .. } => reason.code(),
            ValidationError::ColumnMismatch { .. } => ErrorCode::ColumnMismatch,
            ValidationError::EmptyInput => ErrorCode::EmptyInput,
        }
    }

    /// The substring this error is about
    pub fn offending(&self) -> Option<&str> {
        match self {
            ValidationError::UnsupportedSyntax { input, .. }
            | ValidationError::ColumnMismatch { input, .. } => Some(input),
            ValidationError::UnsupportedPrefix { prefix, .. } => Some(prefix),
            ValidationError::DuplicateEvent { event, .. }
            | ValidationError::InvalidEvent { event, .. }
            | ValidationError::SemanticViolation { event, .. } => Some(event),
            ValidationError::MalformedPosition { token } => Some(token),
            ValidationError::EmptyInput => None,
        }
    }

    /// Build the diagnostic for this error
    pub fn diagnostic(&self) -> Diagnostic {
        let mut diagnostic = Diagnostic::new().with_code(self.code());
        match self {
            ValidationError::UnsupportedSyntax { hint, .. } => {
                diagnostic = diagnostic.with_hint(hint.clone());
            }
            ValidationError::UnsupportedPrefix { input, prefix } => {
                diagnostic = diagnostic
                    .with_source(input.clone())
                    .with_span(SourceSpan::new(0, prefix.len()))
                    .with_hint("level prefixes are c., n., g., m., r. and p.");
            }
            ValidationError::DuplicateEvent { input, event }
            | ValidationError::InvalidEvent { input, event } => {
                diagnostic = diagnostic.with_source(input.clone());
                if let Some(span) = SourceSpan::locate(input, event) {
                    diagnostic = diagnostic.with_span(span);
                }
            }
            ValidationError::SemanticViolation { event, reason } => {
                diagnostic = diagnostic.with_hint(reason.hint());
                if let Some(suggestion) = silent_suggestion(event, *reason) {
                    diagnostic = diagnostic.with_suggestion(suggestion);
                }
            }
            ValidationError::ColumnMismatch { expected, .. } => {
                diagnostic = diagnostic.with_hint(format!("use a {} variant", expected));
            }
            ValidationError::MalformedPosition { .. } | ValidationError::EmptyInput => {}
        }
        diagnostic
    }

    /// Get a formatted error with full diagnostic output
    pub fn detailed_message(&self) -> String {
        self.diagnostic().format(&self.to_string())
    }
}

/// `Val5Val` -> `Val5=`, `54A>A` -> `54=`
fn silent_suggestion(event: &str, reason: SemanticReason) -> Option<String> {
    if reason != SemanticReason::RefEqualsNew {
        return None;
    }
    if let Some((site, _)) = event.split_once('>') {
        let position = site.trim_end_matches(|c: char| c.is_ascii_alphabetic());
        return Some(format!("{}=", position));
    }
    let digits_end = event.rfind(|c: char| c.is_ascii_digit())?;
    Some(format!("{}=", &event[..=digits_end]))
}
