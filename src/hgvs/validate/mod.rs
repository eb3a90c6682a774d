//! Per-kind validators
//!
//! Each validator full-matches one event kind against the level grammar and
//! then applies the semantic rules for that kind. Failing the grammar is an
//! `UnsupportedSyntax` error; a well-formed event that breaks a rule is a
//! `SemanticViolation`.

pub mod nucleotide;
pub mod protein;

use crate::error::{SemanticReason, ValidationError};
use crate::hgvs::classify::infer_kind;
use crate::hgvs::edit::EventCaptures;
use crate::hgvs::grammar::NucleotideGrammar;
use crate::hgvs::interval::{Coordinate, Interval};
use crate::hgvs::variant::{EventKind, MolecularLevel, VariantEvent};
use std::fmt;
use tracing::debug;

/// Classify a bare event and run the validator for its kind
pub fn validate_event(event: &str, level: MolecularLevel) -> Result<VariantEvent, ValidationError> {
    let kind = infer_kind(event);
    debug!(event = %event, %level, %kind, "dispatching event");

    let captures = match NucleotideGrammar::for_level(level) {
        Some(grammar) => match kind {
            EventKind::Substitution => EventCaptures::NaSubstitution(
                nucleotide::validate_substitution(grammar, event)?,
            ),
            EventKind::Deletion => {
                EventCaptures::NaDeletion(nucleotide::validate_deletion(grammar, event)?)
            }
            EventKind::Insertion => {
                EventCaptures::NaInsertion(nucleotide::validate_insertion(grammar, event)?)
            }
            EventKind::Delins => {
                EventCaptures::NaDelins(nucleotide::validate_delins(grammar, event)?)
            }
            EventKind::FrameShift => {
                return Err(ValidationError::unsupported(
                    event,
                    format!("frame shifts cannot be described at the {} level", level),
                ));
            }
        },
        None => match kind {
            EventKind::Substitution => {
                EventCaptures::ProteinSubstitution(protein::validate_substitution(event)?)
            }
            EventKind::Deletion => {
                EventCaptures::ProteinDeletion(protein::validate_deletion(event)?)
            }
            EventKind::Insertion => {
                EventCaptures::ProteinInsertion(protein::validate_insertion(event)?)
            }
            EventKind::Delins => EventCaptures::ProteinDelins(protein::validate_delins(event)?),
            EventKind::FrameShift => {
                EventCaptures::ProteinFrameShift(protein::validate_frame_shift(event)?)
            }
        },
    };

    Ok(VariantEvent::new(kind, level, event, captures))
}

/// Drop a level prefix (`c.`, `r.`, `p.`) allowed for `level`
pub(crate) fn strip_level_prefix(text: &str, level: MolecularLevel) -> &str {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(prefix), Some('.')) if level.prefixes().contains(&prefix) => &text[2..],
        _ => text,
    }
}

/// Drop the predicted wrapper of a protein event: `(Trp24Cys)`
pub(crate) fn strip_predicted(event: &str) -> (&str, bool) {
    match event.strip_prefix('(').and_then(|e| e.strip_suffix(')')) {
        Some(inner) if is_balanced(inner) => (inner, true),
        _ => (event, false),
    }
}

/// Parentheses never close before they open
fn is_balanced(text: &str) -> bool {
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

fn grammar_mismatch(input: &str, level: MolecularLevel, kind: EventKind) -> ValidationError {
    ValidationError::unsupported(input, format!("not a supported {} {}", level, kind))
}

/// Start must strictly precede end when both are orderable
fn check_ordered<T>(event: &str, interval: &Interval<T>) -> Result<(), ValidationError>
where
    T: Coordinate + fmt::Display,
{
    if interval.is_ordered() == Some(false) {
        debug!(event = %event, %interval, "interval out of order");
        return Err(ValidationError::semantic(
            event,
            SemanticReason::UnorderedInterval,
        ));
    }
    Ok(())
}

/// An insertion site must be ordered and its ends adjacent
fn check_flanking<T>(event: &str, interval: &Interval<T>) -> Result<(), ValidationError>
where
    T: Coordinate + fmt::Display,
{
    check_ordered(event, interval)?;
    if interval.is_flanking() == Some(false) {
        debug!(event = %event, %interval, "insertion site does not flank");
        return Err(ValidationError::semantic(
            event,
            SemanticReason::NonFlankingInsertion,
        ));
    }
    Ok(())
}
