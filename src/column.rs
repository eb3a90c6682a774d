//! Score-set column rules
//!
//! Variant tables carry up to three description columns. Each column only
//! admits certain level prefixes, and any cell may hold a null-like value
//! instead of a variant.

use crate::error::ValidationError;
use crate::hgvs::recognizer::Recognizer;
use crate::hgvs::variant::VariantExpression;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static NULL_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(nan|na|none|undefined|n/a|null|nil)?\s*$").unwrap()
});

/// Description column of a score set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantColumn {
    /// `hgvs_nt`
    Nucleotide,
    /// `hgvs_splice`
    Splice,
    /// `hgvs_pro`
    Protein,
}

impl VariantColumn {
    pub fn name(&self) -> &'static str {
        match self {
            VariantColumn::Nucleotide => "hgvs_nt",
            VariantColumn::Splice => "hgvs_splice",
            VariantColumn::Protein => "hgvs_pro",
        }
    }

    /// Prefixes admitted in this column, with what the column expects
    fn admitted(&self, splice_present: bool) -> (&'static [char], &'static str) {
        match self {
            VariantColumn::Nucleotide if splice_present => (
                &['g'],
                "a genomic variant (prefix 'g.') when transcript variants are also defined",
            ),
            VariantColumn::Nucleotide | VariantColumn::Splice => {
                (&['c', 'n'], "a transcript variant (prefix 'c.' or 'n.')")
            }
            VariantColumn::Protein => (&['p'], "a protein variant (prefix 'p.')"),
        }
    }
}

impl fmt::Display for VariantColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Column name that is not a description column
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown column '{0}'. Expected nt, splice or p")]
pub struct UnknownColumn(pub String);

impl FromStr for VariantColumn {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nt" | "hgvs_nt" => Ok(VariantColumn::Nucleotide),
            "splice" | "hgvs_splice" => Ok(VariantColumn::Splice),
            "p" | "pro" | "hgvs_pro" => Ok(VariantColumn::Protein),
            other => Err(UnknownColumn(other.to_string())),
        }
    }
}

/// Empty, whitespace or a null token such as `NA` or `None`
pub fn is_null(value: &str) -> bool {
    NULL_VALUE.is_match(value)
}

/// Validate one cell of a description column
///
/// Null-like cells yield `Ok(None)`.
pub fn validate_column(
    value: &str,
    column: VariantColumn,
    splice_present: bool,
) -> Result<Option<VariantExpression>, ValidationError> {
    validate_column_with(&Recognizer::default(), value, column, splice_present)
}

/// [`validate_column`] with a configured recognizer
pub fn validate_column_with(
    recognizer: &Recognizer,
    value: &str,
    column: VariantColumn,
    splice_present: bool,
) -> Result<Option<VariantExpression>, ValidationError> {
    if is_null(value) {
        return Ok(None);
    }
    let expression = recognizer.validate_expression(value)?;

    let (admitted, expected) = column.admitted(splice_present);
    let prefix = value.chars().next().map(|c| c.to_ascii_lowercase());
    if !prefix.is_some_and(|p| admitted.contains(&p)) {
        return Err(ValidationError::ColumnMismatch {
            input: value.to_string(),
            column: column.name().to_string(),
            expected: expected.to_string(),
        });
    }
    Ok(Some(expression))
}
