//! DNA and RNA validators
//!
//! The validators take the grammar of the level being checked, so DNA and
//! RNA share every rule. The [`dna`] and [`rna`] modules bind the grammar.

use super::{check_flanking, check_ordered, grammar_mismatch, strip_level_prefix};
use crate::error::{SemanticReason, ValidationError};
use crate::hgvs::edit::{NaDeletion, NaDelins, NaInserted, NaInsertion, NaLocus, NaSubstitution};
use crate::hgvs::grammar::NucleotideGrammar;
use crate::hgvs::interval::NaInterval;
use crate::hgvs::variant::EventKind;

/// Substitution, silent allele or RNA transcript effect
///
/// The reference and new base must differ unless a mosaic marker is given.
pub fn validate_substitution(
    grammar: &NucleotideGrammar,
    text: &str,
) -> Result<NaSubstitution, ValidationError> {
    let event = strip_level_prefix(text, grammar.level);
    let (_, substitution) = grammar
        .substitution(event)
        .map_err(|_| grammar_mismatch(text, grammar.level, EventKind::Substitution))?;

    if let NaSubstitution::Change {
        reference,
        new,
        mosaic: None,
        ..
    } = &substitution
    {
        if reference == new {
            return Err(ValidationError::semantic(
                event,
                SemanticReason::RefEqualsNew,
            ));
        }
    }
    Ok(substitution)
}

/// Deletion of a site, range, uncertain range or breakpoint pair
pub fn validate_deletion(
    grammar: &NucleotideGrammar,
    text: &str,
) -> Result<NaDeletion, ValidationError> {
    let event = strip_level_prefix(text, grammar.level);
    let (_, deletion) = grammar
        .deletion(event)
        .map_err(|_| grammar_mismatch(text, grammar.level, EventKind::Deletion))?;

    check_locus(event, &deletion.locus)?;
    if let NaLocus::Site(position) = &deletion.locus {
        if position.is_unknown() && deletion.deleted.is_none() {
            return Err(ValidationError::semantic(
                event,
                SemanticReason::MissingDeletedResidue,
            ));
        }
    }
    Ok(deletion)
}

/// Insertion between two flanking positions, or somewhere in an uncertain range
pub fn validate_insertion(
    grammar: &NucleotideGrammar,
    text: &str,
) -> Result<NaInsertion, ValidationError> {
    let event = strip_level_prefix(text, grammar.level);
    let (_, insertion) = grammar
        .insertion(event)
        .map_err(|_| grammar_mismatch(text, grammar.level, EventKind::Insertion))?;

    match &insertion.locus {
        NaLocus::Range(site) => check_flanking(event, site)?,
        locus => check_locus(event, locus)?,
    }
    if let NaInserted::Intervals(intervals) = &insertion.inserted {
        for interval in intervals {
            check_ordered(event, interval)?;
        }
    }
    Ok(insertion)
}

pub fn validate_delins(
    grammar: &NucleotideGrammar,
    text: &str,
) -> Result<NaDelins, ValidationError> {
    let event = strip_level_prefix(text, grammar.level);
    let (_, delins) = grammar
        .delins(event)
        .map_err(|_| grammar_mismatch(text, grammar.level, EventKind::Delins))?;

    check_locus(event, &delins.locus)?;
    Ok(delins)
}

fn check_locus(event: &str, locus: &NaLocus) -> Result<(), ValidationError> {
    match locus {
        NaLocus::Site(_) => Ok(()),
        NaLocus::Range(interval) | NaLocus::Uncertain(interval) => check_ordered(event, interval),
        NaLocus::Breakpoint { start, end } => {
            check_ordered(event, start)?;
            check_ordered(event, end)?;
            check_ordered(event, &NaInterval::new(start.end, end.start))
        }
    }
}

/// DNA validators (`c.`, `n.`, `g.`, `m.`)
pub mod dna {
    use super::*;
    use crate::hgvs::grammar::DNA;

    pub fn validate_substitution(text: &str) -> Result<NaSubstitution, ValidationError> {
        super::validate_substitution(&DNA, text)
    }

    pub fn validate_deletion(text: &str) -> Result<NaDeletion, ValidationError> {
        super::validate_deletion(&DNA, text)
    }

    pub fn validate_insertion(text: &str) -> Result<NaInsertion, ValidationError> {
        super::validate_insertion(&DNA, text)
    }

    pub fn validate_delins(text: &str) -> Result<NaDelins, ValidationError> {
        super::validate_delins(&DNA, text)
    }
}

/// RNA validators (`r.`)
pub mod rna {
    use super::*;
    use crate::hgvs::grammar::RNA;

    pub fn validate_substitution(text: &str) -> Result<NaSubstitution, ValidationError> {
        super::validate_substitution(&RNA, text)
    }

    pub fn validate_deletion(text: &str) -> Result<NaDeletion, ValidationError> {
        super::validate_deletion(&RNA, text)
    }

    pub fn validate_insertion(text: &str) -> Result<NaInsertion, ValidationError> {
        super::validate_insertion(&RNA, text)
    }

    pub fn validate_delins(text: &str) -> Result<NaDelins, ValidationError> {
        super::validate_delins(&RNA, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::hgvs::location::Position;

    fn reason(err: ValidationError) -> Option<SemanticReason> {
        match err {
            ValidationError::SemanticViolation { reason, .. } => Some(reason),
            _ => None,
        }
    }

    #[test]
    fn test_substitution_ref_equals_new() {
        let err = dna::validate_substitution("54A>A").unwrap_err();
        assert_eq!(reason(err), Some(SemanticReason::RefEqualsNew));

        assert!(dna::validate_substitution("54=/A>A").is_ok());
        assert!(dna::validate_substitution("54=").is_ok());
        assert!(rna::validate_substitution("54a>a").is_err());
    }

    #[test]
    fn test_substitution_with_prefix() {
        let sub = dna::validate_substitution("c.76A>T").unwrap();
        assert!(matches!(sub, NaSubstitution::Change { .. }));
        assert!(rna::validate_substitution("r.spl").is_ok());
        assert!(dna::validate_substitution("r.76A>T").is_err());
    }

    #[test]
    fn test_syntax_error_keeps_input() {
        let err = dna::validate_deletion("19delR").unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnsupportedSyntax);
        assert_eq!(err.offending(), Some("19delR"));
    }

    #[test]
    fn test_deletion_order() {
        assert!(dna::validate_deletion("19_21del").is_ok());
        let err = dna::validate_deletion("21_19del").unwrap_err();
        assert_eq!(reason(err), Some(SemanticReason::UnorderedInterval));
        let err = dna::validate_deletion("19_19del").unwrap_err();
        assert_eq!(reason(err), Some(SemanticReason::UnorderedInterval));
        assert!(dna::validate_deletion("?_19del").is_ok());
        assert!(dna::validate_deletion("-5_*3del").is_ok());
        assert!(dna::validate_deletion("*5_-3del").is_err());
    }

    #[test]
    fn test_deletion_breakpoint_order() {
        assert!(dna::validate_deletion("(4071+1_4072-1)_(5154+1_5155-1)del").is_ok());
        let err = dna::validate_deletion("(5154+1_5155-1)_(4071+1_4072-1)del").unwrap_err();
        assert_eq!(reason(err), Some(SemanticReason::UnorderedInterval));
    }

    #[test]
    fn test_deletion_unknown_site_needs_base() {
        let err = dna::validate_deletion("?del").unwrap_err();
        assert_eq!(reason(err), Some(SemanticReason::MissingDeletedResidue));
        let deletion = dna::validate_deletion("?delA").unwrap();
        assert_eq!(deletion.locus, NaLocus::Site(Position::Unknown));
        assert!(dna::validate_deletion("19del").is_ok());
    }

    #[test]
    fn test_insertion_flanking() {
        assert!(dna::validate_insertion("169_170insA").is_ok());
        assert!(dna::validate_insertion("93+1_93+2insT").is_ok());
        let err = dna::validate_insertion("169_171insA").unwrap_err();
        assert_eq!(reason(err), Some(SemanticReason::NonFlankingInsertion));
        let err = dna::validate_insertion("170_169insA").unwrap_err();
        assert_eq!(reason(err), Some(SemanticReason::UnorderedInterval));
        assert!(dna::validate_insertion("(222_226)insG").is_ok());
        assert!(dna::validate_insertion("93_93+1insT").is_ok());
    }

    #[test]
    fn test_rna_interval_insertion_order() {
        assert!(rna::validate_insertion("2949_2950ins[2950-30_2950-12;2950-4_2950-1]").is_ok());
        let err =
            rna::validate_insertion("2949_2950ins[2950-12_2950-30;2950-4_2950-1]").unwrap_err();
        assert_eq!(reason(err), Some(SemanticReason::UnorderedInterval));
    }

    #[test]
    fn test_delins_order() {
        assert!(dna::validate_delins("6775delinsGA").is_ok());
        assert!(dna::validate_delins("6775_6777delinsC").is_ok());
        let err = dna::validate_delins("6777_6775delinsC").unwrap_err();
        assert_eq!(reason(err), Some(SemanticReason::UnorderedInterval));
        assert!(rna::validate_delins("r.22_23delinsaa").is_ok());
    }
}
