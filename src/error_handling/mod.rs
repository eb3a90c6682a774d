//! Configurable input handling.
//!
//! Three modes (Strict, Lenient, Silent) plus per-error-type overrides
//! control what happens to stray whitespace in a description.
//!
//! # Example
//!
//! ```
//! use hgvs_validate::error_handling::{Action, ErrorConfig, ErrorMode, ErrorType};
//!
//! // Strict mode (default): stray whitespace is a syntax error
//! let config = ErrorConfig::strict();
//! assert_eq!(config.mode, ErrorMode::Strict);
//! assert_eq!(config.action_for(ErrorType::SurroundingWhitespace), Action::Reject);
//!
//! // Lenient mode, but never touch separators
//! let config = ErrorConfig::lenient().with_override(ErrorType::SeparatorWhitespace, Action::Accept);
//! assert_eq!(config.action_for(ErrorType::SeparatorWhitespace), Action::Accept);
//! assert_eq!(config.action_for(ErrorType::SurroundingWhitespace), Action::Warn);
//! ```
//!
//! | Error Type | Example | Code |
//! |------------|---------|------|
//! | `SurroundingWhitespace` | ` c.76A>T ` → `c.76A>T` | W2001 |
//! | `SeparatorWhitespace` | `p.[Trp24Cys; Lys23_Val25del]` → `p.[Trp24Cys;Lys23_Val25del]` | W2002 |

mod preprocessor;
mod types;

pub use preprocessor::{CorrectionWarning, InputPreprocessor, PreprocessResult};
pub use types::{Action, ErrorMode, ErrorType, LegacyTokenPolicy};

use std::collections::HashMap;

/// A base mode plus per-error-type overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorConfig {
    pub mode: ErrorMode,
    pub overrides: HashMap<ErrorType, Action>,
}

impl ErrorConfig {
    pub fn new(mode: ErrorMode) -> Self {
        Self {
            mode,
            overrides: HashMap::new(),
        }
    }

    pub fn strict() -> Self {
        Self::new(ErrorMode::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(ErrorMode::Lenient)
    }

    pub fn silent() -> Self {
        Self::new(ErrorMode::Silent)
    }

    /// Override the mode's action for one error type.
    pub fn with_override(mut self, error_type: ErrorType, action: Action) -> Self {
        self.overrides.insert(error_type, action);
        self
    }

    /// The override for `error_type` if there is one, else the mode's action.
    pub fn action_for(&self, error_type: ErrorType) -> Action {
        self.overrides
            .get(&error_type)
            .copied()
            .unwrap_or_else(|| self.mode.default_action())
    }

    pub fn preprocessor(&self) -> InputPreprocessor {
        InputPreprocessor::new(self.clone())
    }
}

/// A validation result together with the corrections made to reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct WithWarnings<T> {
    pub result: T,
    pub warnings: Vec<CorrectionWarning>,
    pub original_input: String,
    pub preprocessed_input: String,
}

impl<T> WithWarnings<T> {
    pub fn new(
        result: T,
        warnings: Vec<CorrectionWarning>,
        original_input: String,
        preprocessed_input: String,
    ) -> Self {
        Self {
            result,
            warnings,
            original_input,
            preprocessed_input,
        }
    }

    /// Input was changed before validation, with or without warnings.
    pub fn had_corrections(&self) -> bool {
        self.original_input != self.preprocessed_input
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_config_default() {
        let config = ErrorConfig::default();
        assert_eq!(config.mode, ErrorMode::Strict);
        assert!(config.overrides.is_empty());
        for error_type in ErrorType::ALL {
            assert_eq!(config.action_for(error_type), Action::Reject);
        }
    }

    #[test]
    fn test_error_config_modes() {
        assert_eq!(
            ErrorConfig::lenient().action_for(ErrorType::SeparatorWhitespace),
            Action::Warn
        );
        assert_eq!(
            ErrorConfig::silent().action_for(ErrorType::SurroundingWhitespace),
            Action::Ignore
        );
    }

    #[test]
    fn test_override_wins_over_mode() {
        let config = ErrorConfig::silent()
            .with_override(ErrorType::SurroundingWhitespace, Action::Reject);
        assert_eq!(config.action_for(ErrorType::SurroundingWhitespace), Action::Reject);
        assert_eq!(config.action_for(ErrorType::SeparatorWhitespace), Action::Ignore);
    }

    #[test]
    fn test_error_config_preprocessor() {
        let result = ErrorConfig::lenient().preprocessor().preprocess(" c.76A>T ");
        assert!(result.is_ok());
        assert_eq!(result.preprocessed, "c.76A>T");
    }

    #[test]
    fn test_with_warnings() {
        let result = WithWarnings::new(42, Vec::new(), "a ".to_string(), "a".to_string());
        assert!(result.had_corrections());
        assert!(!result.has_warnings());
    }
}
