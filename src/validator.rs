//! Configured validation entry point
//!
//! [`Validator`] bundles the error handling mode, the legacy token policy and
//! the input length limit, preprocesses input accordingly and hands it to the
//! [`Recognizer`].

use crate::config::ValidatorConfig;
use crate::error::ValidationError;
use crate::error_handling::{ErrorConfig, InputPreprocessor, LegacyTokenPolicy, WithWarnings};
use crate::hgvs::recognizer::Recognizer;
use crate::hgvs::variant::{MolecularLevel, VariantEvent, VariantExpression};

const DEFAULT_MAX_LENGTH: usize = 1000;

/// Validator with preprocessing and limits
#[derive(Debug, Clone)]
pub struct Validator {
    preprocessor: InputPreprocessor,
    recognizer: Recognizer,
    max_length: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            preprocessor: InputPreprocessor::default(),
            recognizer: Recognizer::default(),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl Validator {
    /// Strict validator with default limits
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ValidatorConfig) -> Self {
        Self {
            preprocessor: InputPreprocessor::new(config.to_error_config()),
            recognizer: Recognizer::new(config.validation.legacy_tokens),
            max_length: config.validation.max_length,
        }
    }

    pub fn with_error_config(mut self, config: ErrorConfig) -> Self {
        self.preprocessor = InputPreprocessor::new(config);
        self
    }

    pub fn with_legacy_tokens(mut self, policy: LegacyTokenPolicy) -> Self {
        self.recognizer = Recognizer::new(policy);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Validate one event at `level`
    pub fn validate(
        &self,
        text: &str,
        level: MolecularLevel,
    ) -> Result<VariantEvent, ValidationError> {
        self.run(text, |input| self.recognizer.validate_single(input, level))
            .map(|outcome| outcome.result)
    }

    /// Validate a multi-variant
    pub fn validate_multi(&self, text: &str) -> Result<Vec<VariantEvent>, ValidationError> {
        self.run(text, |input| self.recognizer.validate_multi(input))
            .map(|outcome| outcome.result)
    }

    pub fn is_multi(&self, text: &str) -> bool {
        self.run(text, |input| Ok(self.recognizer.is_multi(input)))
            .is_ok_and(|outcome| outcome.result)
    }

    /// Validate a single or multi-variant, level taken from the prefix
    pub fn validate_expression(&self, text: &str) -> Result<VariantExpression, ValidationError> {
        self.validate_with_warnings(text).map(|outcome| outcome.result)
    }

    /// Like [`Validator::validate_expression`], keeping the preprocessing
    /// corrections
    pub fn validate_with_warnings(
        &self,
        text: &str,
    ) -> Result<WithWarnings<VariantExpression>, ValidationError> {
        self.run(text, |input| self.recognizer.validate_expression(input))
    }

    fn run<T>(
        &self,
        text: &str,
        validate: impl FnOnce(&str) -> Result<T, ValidationError>,
    ) -> Result<WithWarnings<T>, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        if text.len() > self.max_length {
            return Err(ValidationError::unsupported(
                truncate(text, 40),
                format!(
                    "input is {} bytes, longer than the limit of {}",
                    text.len(),
                    self.max_length
                ),
            ));
        }

        let (preprocessed, warnings) = self.preprocessor.preprocess(text).into_result()?;
        let result = validate(&preprocessed)?;
        Ok(WithWarnings::new(
            result,
            warnings,
            text.to_string(),
            preprocessed,
        ))
    }
}

/// At most `max` bytes of `text`, cut on a character boundary
fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::error_handling::ErrorType;

    #[test]
    fn test_default_is_strict() {
        let validator = Validator::new();
        assert!(validator.validate("c.76A>T", MolecularLevel::Dna).is_ok());
        let err = validator
            .validate(" c.76A>T", MolecularLevel::Dna)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnsupportedSyntax);
    }

    #[test]
    fn test_empty_input() {
        let validator = Validator::new();
        assert_eq!(
            validator.validate_expression(""),
            Err(ValidationError::EmptyInput)
        );
        assert_eq!(
            validator.validate_expression("   "),
            Err(ValidationError::EmptyInput)
        );
    }

    #[test]
    fn test_max_length() {
        let validator = Validator::new().with_max_length(10);
        assert!(validator.validate_expression("c.76A>T").is_ok());
        let err = validator.validate_expression("c.[76A>T;83G>C]").unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnsupportedSyntax);
        assert!(err.to_string().contains("longer than the limit"));
    }

    #[test]
    fn test_lenient_warnings() {
        let validator = Validator::new().with_error_config(ErrorConfig::lenient());
        let outcome = validator
            .validate_with_warnings(" p.[Trp24Cys; Lys23_Val25del] ")
            .unwrap();
        assert!(outcome.result.is_multi());
        assert!(outcome.had_corrections());
        assert_eq!(outcome.preprocessed_input, "p.[Trp24Cys;Lys23_Val25del]");
        assert_eq!(outcome.warnings.len(), 3);
        assert_eq!(
            outcome.warnings[0].error_type,
            ErrorType::SurroundingWhitespace
        );
    }

    #[test]
    fn test_lenient_duplicates_after_cleanup() {
        let validator = Validator::new().with_error_config(ErrorConfig::silent());
        let err = validator
            .validate_multi("p.[Trp24Cys; Trp24Cys]")
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateEvent);
    }

    #[test]
    fn test_from_config() {
        let config = ValidatorConfig::parse(
            "[validation]\nmode = \"lenient\"\nlegacy_tokens = \"accept\"\nmax_length = 50\n",
        )
        .unwrap();
        let validator = Validator::from_config(&config);
        assert_eq!(validator.max_length(), 50);
        assert!(validator.validate(" _wt ", MolecularLevel::Dna).is_ok());
        assert!(validator.is_multi("c.[_wt; 76A>T]"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("a\u{e9}b", 2), "a...");
    }
}
