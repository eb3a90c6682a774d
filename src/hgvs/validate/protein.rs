//! Protein validators
//!
//! Every validator accepts an optional `p.` prefix and the predicted
//! wrapper: `p.(Trp24Cys)`.

use super::{check_flanking, check_ordered, grammar_mismatch, strip_level_prefix, strip_predicted};
use crate::error::{SemanticReason, ValidationError};
use crate::hgvs::edit::{
    ProtLocus, ProteinAllele, ProteinDeletion, ProteinDelins, ProteinFrameShift,
    ProteinInsertion, ProteinSubstitution,
};
use crate::hgvs::grammar::protein;
use crate::hgvs::location::ProtPos;
use crate::hgvs::variant::{EventKind, MolecularLevel};

fn bare_event(text: &str) -> &str {
    strip_predicted(strip_level_prefix(text, MolecularLevel::Protein)).0
}

/// `Trp24Cys` and its silent, unknown, mosaic and whole-protein forms
pub fn validate_substitution(text: &str) -> Result<ProteinSubstitution, ValidationError> {
    let event = bare_event(text);
    let (_, substitution) = protein::substitution(event)
        .map_err(|_| grammar_mismatch(text, MolecularLevel::Protein, EventKind::Substitution))?;

    if let ProteinSubstitution::Change {
        reference,
        new: ProteinAllele::Residue(new),
        mosaic: false,
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

pub fn validate_deletion(text: &str) -> Result<ProteinDeletion, ValidationError> {
    let event = bare_event(text);
    let (_, deletion) = protein::deletion(event)
        .map_err(|_| grammar_mismatch(text, MolecularLevel::Protein, EventKind::Deletion))?;

    match &deletion.locus {
        ProtLocus::Range(interval) => check_ordered(event, interval)?,
        ProtLocus::Site(ProtPos::Unknown) => {
            return Err(ValidationError::semantic(
                event,
                SemanticReason::MissingDeletedResidue,
            ));
        }
        ProtLocus::Site(_) => {}
    }
    Ok(deletion)
}

pub fn validate_insertion(text: &str) -> Result<ProteinInsertion, ValidationError> {
    let event = bare_event(text);
    let (_, insertion) = protein::insertion(event)
        .map_err(|_| grammar_mismatch(text, MolecularLevel::Protein, EventKind::Insertion))?;

    check_flanking(event, &insertion.site)?;
    Ok(insertion)
}

pub fn validate_delins(text: &str) -> Result<ProteinDelins, ValidationError> {
    let event = bare_event(text);
    let (_, delins) = protein::delins(event)
        .map_err(|_| grammar_mismatch(text, MolecularLevel::Protein, EventKind::Delins))?;

    if let ProtLocus::Range(interval) = &delins.locus {
        check_ordered(event, interval)?;
    }
    Ok(delins)
}

/// `Arg97ProfsTer23`; the residue before `fs` cannot be a stop. In the short
/// form `Arg97fs` that residue is the reference.
pub fn validate_frame_shift(text: &str) -> Result<ProteinFrameShift, ValidationError> {
    let event = bare_event(text);
    let (_, frame_shift) = protein::frame_shift(event)
        .map_err(|_| grammar_mismatch(text, MolecularLevel::Protein, EventKind::FrameShift))?;

    let before_fs = frame_shift.new.unwrap_or(frame_shift.reference);
    if before_fs.is_stop() {
        return Err(ValidationError::semantic(
            event,
            SemanticReason::StopBeforeFrameShift,
        ));
    }
    Ok(frame_shift)
}
