//! Tests for error handling modes and configuration.
//!
//! Tests the three error modes (Strict, Lenient, Silent), per-type overrides
//! and how a loaded config drives the [`Validator`].

use hgvs_validate::error_handling::{Action, ErrorConfig, ErrorMode, ErrorType};
use hgvs_validate::{ErrorCode, MolecularLevel, Validator, ValidatorConfig};
use std::io::Write;

// ============================================================================
// Mode Tests
// ============================================================================

#[test]
fn test_strict_mode_rejects_surrounding_whitespace() {
    let preprocessor = ErrorConfig::strict().preprocessor();
    let result = preprocessor.preprocess(" c.76A>T\t");
    assert!(!result.is_ok(), "Strict mode should reject whitespace");
    let err = result.error.unwrap();
    assert_eq!(err.code(), ErrorCode::UnsupportedSyntax);
    assert!(err.to_string().contains("did you mean 'c.76A>T'"), "{err}");
}

#[test]
fn test_lenient_mode_corrects_with_warning() {
    let preprocessor = ErrorConfig::lenient().preprocessor();
    let result = preprocessor.preprocess("p.[Trp24Cys; Lys23_Val25del]");
    assert!(result.is_ok());
    assert_eq!(result.preprocessed, "p.[Trp24Cys;Lys23_Val25del]");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].error_type, ErrorType::SeparatorWhitespace);
}

#[test]
fn test_silent_mode_corrects_without_warning() {
    let preprocessor = ErrorConfig::silent().preprocessor();
    let result = preprocessor.preprocess("  c.[ 76A>T ; 83G>C ]  ");
    assert!(result.is_ok());
    assert_eq!(result.preprocessed, "c.[76A>T;83G>C]");
    assert!(result.warnings.is_empty());
    assert!(result.has_corrections());
}

#[test]
fn test_inner_whitespace_is_left_alone() {
    // Whitespace inside an event is not a separator issue; the grammar rejects it
    let validator = Validator::new().with_error_config(ErrorConfig::silent());
    let err = validator
        .validate("c.76A >T", MolecularLevel::Dna)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnsupportedSyntax);
}

// ============================================================================
// Override Tests
// ============================================================================

#[test]
fn test_override_resolution() {
    assert_eq!(ErrorMode::Lenient.default_action(), Action::Warn);
    assert_eq!(ErrorMode::Strict.default_action(), Action::Reject);

    let config =
        ErrorConfig::strict().with_override(ErrorType::SurroundingWhitespace, Action::Ignore);
    assert_eq!(config.action_for(ErrorType::SurroundingWhitespace), Action::Ignore);
    assert_eq!(config.action_for(ErrorType::SeparatorWhitespace), Action::Reject);
}

#[test]
fn test_strict_with_trim_override() {
    let config =
        ErrorConfig::strict().with_override(ErrorType::SurroundingWhitespace, Action::Ignore);
    let validator = Validator::new().with_error_config(config);

    assert!(validator.validate_expression(" c.76A>T ").is_ok());
    let err = validator
        .validate_expression("c.[76A>T; 83G>C]")
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnsupportedSyntax);
}

#[test]
fn test_lenient_with_reject_override() {
    let validator = Validator::new().with_error_config(
        ErrorConfig::lenient().with_override(ErrorType::SeparatorWhitespace, Action::Reject),
    );
    assert!(validator.validate_expression(" c.[76A>T;83G>C] ").is_ok());
    let err = validator
        .validate_expression("c.[76A>T ;83G>C]")
        .unwrap_err();
    assert!(err.to_string().contains("separator"), "{err}");
}

// ============================================================================
// Validator Tests
// ============================================================================

#[test]
fn test_whitespace_duplicates_caught_after_cleanup() {
    let validator = Validator::new().with_error_config(ErrorConfig::lenient());
    let err = validator
        .validate_multi("p.[Trp24Cys;Trp24Cys ]")
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DuplicateEvent);
}

#[test]
fn test_strict_reports_whitespace_not_duplicate() {
    let err = Validator::new()
        .validate_multi("p.[Trp24Cys;Trp24Cys ]")
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnsupportedSyntax);
}

#[test]
fn test_validate_with_warnings_keeps_inputs() {
    let validator = Validator::new().with_error_config(ErrorConfig::lenient());
    let outcome = validator.validate_with_warnings(" r.spl").unwrap();
    assert_eq!(outcome.original_input, " r.spl");
    assert_eq!(outcome.preprocessed_input, "r.spl");
    assert!(outcome.has_warnings());
    assert_eq!(outcome.warnings[0].error_type.code(), "W2001");
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_file_drives_validator() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[validation]
mode = "silent"
legacy_tokens = "accept"
max_length = 64

[validation.overrides]
W2002 = "reject"
"#
    )
    .unwrap();

    let config = ValidatorConfig::load_from_path(file.path()).unwrap();
    let validator = Validator::from_config(&config);
    assert_eq!(validator.max_length(), 64);

    assert!(validator.validate_expression(" _sy ").is_ok());
    let err = validator
        .validate_expression("c.[76A>T; 83G>C]")
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnsupportedSyntax);
}

#[test]
fn test_config_rejects_unknown_code() {
    let err = ValidatorConfig::parse("[validation.overrides]\nW9999 = \"warn\"\n").unwrap_err();
    assert!(err.to_string().contains("W9999"));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = ValidatorConfig::parse("[validation]\nmode = \"lenient\"\n").unwrap();
    let text = config.to_toml().unwrap();
    assert_eq!(ValidatorConfig::parse(&text).unwrap(), config);
}
