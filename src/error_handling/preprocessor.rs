//! Input preprocessor for normalizing variant descriptions.
//!
//! The preprocessor removes stray whitespace before validation, based on the
//! configured error handling mode.

use super::types::{Action, ErrorType};
use super::ErrorConfig;
use crate::error::ValidationError;
use tracing::warn;

/// Characters around which whitespace is never significant
const SEPARATOR_CHARS: [char; 4] = [';', ',', '[', ']'];

/// One whitespace run removed from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionWarning {
    pub error_type: ErrorType,
    pub message: String,
    /// Byte range of the run, before this correction phase
    pub span: (usize, usize),
    /// The removed text
    pub removed: String,
}

impl CorrectionWarning {
    fn new(error_type: ErrorType, input: &str, start: usize, end: usize) -> Self {
        let removed = input[start..end].to_string();
        Self {
            error_type,
            message: format!(
                "removed {} '{}' at {}..{}",
                error_type.description(),
                removed.escape_debug(),
                start,
                end
            ),
            span: (start, end),
            removed,
        }
    }
}

/// Outcome of preprocessing one input.
#[derive(Debug, Clone)]
pub struct PreprocessResult {
    pub original: String,
    /// Corrected input; the original when rejected or nothing was corrected
    pub preprocessed: String,
    pub warnings: Vec<CorrectionWarning>,
    pub error: Option<ValidationError>,
}

impl PreprocessResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn has_corrections(&self) -> bool {
        self.original != self.preprocessed
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// The preprocessed input, or the rejection
    pub fn into_result(self) -> Result<(String, Vec<CorrectionWarning>), ValidationError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok((self.preprocessed, self.warnings)),
        }
    }
}

/// Removes stray whitespace according to an [`ErrorConfig`].
#[derive(Debug, Clone, Default)]
pub struct InputPreprocessor {
    config: ErrorConfig,
}

/// Correction phases, applied in order
const PHASES: [(ErrorType, fn(&str) -> (String, Vec<CorrectionWarning>)); 2] = [
    (ErrorType::SurroundingWhitespace, trim_surrounding),
    (ErrorType::SeparatorWhitespace, strip_separator_whitespace),
];

impl InputPreprocessor {
    pub fn new(config: ErrorConfig) -> Self {
        Self { config }
    }

    pub fn strict() -> Self {
        Self::new(ErrorConfig::strict())
    }

    pub fn lenient() -> Self {
        Self::new(ErrorConfig::lenient())
    }

    pub fn silent() -> Self {
        Self::new(ErrorConfig::silent())
    }

    pub fn preprocess(&self, input: &str) -> PreprocessResult {
        let mut current = input.to_string();
        let mut warnings = Vec::new();

        for (error_type, detect) in PHASES {
            let (corrected, found) = detect(&current);
            let Some(first) = found.first() else {
                continue;
            };
            match self.config.action_for(error_type) {
                Action::Reject => {
                    let hint = format!(
                        "{} at {}..{}; did you mean '{}'?",
                        error_type.description(),
                        first.span.0,
                        first.span.1,
                        corrected
                    );
                    return PreprocessResult {
                        original: input.to_string(),
                        preprocessed: input.to_string(),
                        warnings: Vec::new(),
                        error: Some(ValidationError::unsupported(input, hint)),
                    };
                }
                Action::Warn => {
                    for warning in &found {
                        warn!(code = error_type.code(), "{}", warning.message);
                    }
                    warnings.extend(found);
                    current = corrected;
                }
                Action::Ignore => current = corrected,
                Action::Accept => {}
            }
        }

        PreprocessResult {
            original: input.to_string(),
            preprocessed: current,
            warnings,
            error: None,
        }
    }
}

/// Leading and trailing whitespace
fn trim_surrounding(input: &str) -> (String, Vec<CorrectionWarning>) {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.len() == input.len() {
        return (input.to_string(), Vec::new());
    }
    let leading = input.len() - input.trim_start().len();
    let trailing = input.trim_end().len();

    let mut found = Vec::new();
    if leading > 0 {
        found.push(CorrectionWarning::new(
            ErrorType::SurroundingWhitespace,
            input,
            0,
            leading,
        ));
    }
    if trailing < input.len() {
        found.push(CorrectionWarning::new(
            ErrorType::SurroundingWhitespace,
            input,
            trailing,
            input.len(),
        ));
    }
    (trimmed.to_string(), found)
}

/// Whitespace runs touching `;`, `,`, `[` or `]`
fn strip_separator_whitespace(input: &str) -> (String, Vec<CorrectionWarning>) {
    let mut result = String::with_capacity(input.len());
    let mut found = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut previous: Option<char> = None;

    for (i, c) in input.char_indices() {
        if c.is_whitespace() {
            run_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = run_start.take() {
            let touches_separator = SEPARATOR_CHARS.contains(&c)
                || previous.is_some_and(|p| SEPARATOR_CHARS.contains(&p));
            if touches_separator {
                found.push(CorrectionWarning::new(
                    ErrorType::SeparatorWhitespace,
                    input,
                    start,
                    i,
                ));
            } else {
                result.push_str(&input[start..i]);
            }
        }
        result.push(c);
        previous = Some(c);
    }
    if let Some(start) = run_start {
        result.push_str(&input[start..]);
    }
    (result, found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_strict_passes_clean_input() {
        let result = InputPreprocessor::strict().preprocess("c.76A>T");
        assert!(result.is_ok());
        assert!(!result.has_corrections());
        assert_eq!(result.preprocessed, "c.76A>T");
    }

    #[test]
    fn test_strict_rejects_surrounding_whitespace() {
        let result = InputPreprocessor::strict().preprocess(" c.76A>T");
        assert!(!result.is_ok());
        let err = result.error.unwrap();
        assert_eq!(err.code(), ErrorCode::UnsupportedSyntax);
        assert!(err.to_string().contains("surrounding whitespace"));
    }

    #[test]
    fn test_lenient_trims_with_warnings() {
        let result = InputPreprocessor::lenient().preprocess("  c.76A>T\t");
        assert!(result.is_ok());
        assert_eq!(result.preprocessed, "c.76A>T");
        assert_eq!(result.warnings.len(), 2);
        assert_eq!(result.warnings[0].span, (0, 2));
        assert_eq!(result.warnings[1].removed, "\t");
        assert!(result.has_corrections());
    }

    #[test]
    fn test_lenient_strips_separator_whitespace() {
        let result = InputPreprocessor::lenient().preprocess("p.[ Trp24Cys ; Lys23_Val25del ]");
        assert!(result.is_ok());
        assert_eq!(result.preprocessed, "p.[Trp24Cys;Lys23_Val25del]");
        assert_eq!(result.warnings.len(), 4);
        assert!(result
            .warnings
            .iter()
            .all(|w| w.error_type == ErrorType::SeparatorWhitespace));
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let result = InputPreprocessor::lenient().preprocess("c.76 A>T");
        assert_eq!(result.preprocessed, "c.76 A>T");
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_silent_corrects_without_warnings() {
        let result = InputPreprocessor::silent().preprocess(" r.[76a>u, 77a>u] ");
        assert!(result.is_ok());
        assert_eq!(result.preprocessed, "r.[76a>u,77a>u]");
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_override_accept_keeps_input() {
        let config =
            ErrorConfig::strict().with_override(ErrorType::SurroundingWhitespace, Action::Accept);
        let result = InputPreprocessor::new(config).preprocess("c.76A>T ");
        assert!(result.is_ok());
        assert_eq!(result.preprocessed, "c.76A>T ");
    }

    #[test]
    fn test_into_result() {
        let (text, warnings) = InputPreprocessor::lenient()
            .preprocess(" c.76A>T")
            .into_result()
            .unwrap();
        assert_eq!(text, "c.76A>T");
        assert_eq!(warnings.len(), 1);
        assert!(InputPreprocessor::strict()
            .preprocess(" c.76A>T")
            .into_result()
            .is_err());
    }
}
