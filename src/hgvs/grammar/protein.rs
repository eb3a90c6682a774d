//! Protein event grammar
//!
//! Residues are three-letter amino acid codes, with `*` accepted for `Ter`.

use super::position::{amino_acid, count, prot_interval, protein_position};
use crate::hgvs::edit::{
    FrameShiftStop, ProtLocus, ProteinAllele, ProteinDeletion, ProteinDelins, ProteinFrameShift,
    ProteinInserted, ProteinInsertion, ProteinSubstitution,
};
use crate::hgvs::location::AminoAcid;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::{all_consuming, map, opt, value},
    multi::{many0, many1},
    sequence::{delimited, preceded},
    IResult, Parser,
};

// ---- Substitution

/// `Trp24Cys`, `Trp24*`, `Trp24=/Cys`, `Trp24Cys^Ser`, `Cys188=`, `Trp24?`,
/// and the whole-protein forms `0`, `?`, `=`
pub fn substitution(input: &str) -> IResult<&str, ProteinSubstitution> {
    alt((
        all_consuming(value(ProteinSubstitution::NoProtein, tag("0"))),
        all_consuming(value(ProteinSubstitution::NotPredicted, tag("?"))),
        all_consuming(value(ProteinSubstitution::Identity, tag("="))),
        all_consuming(residue_substitution),
    ))
    .parse(input)
}

fn residue_substitution(input: &str) -> IResult<&str, ProteinSubstitution> {
    let (remaining, reference) = amino_acid(input)?;
    let (remaining, position) = count(remaining)?;

    if let Some(remaining) = remaining.strip_prefix("=/") {
        let (remaining, new) = amino_acid(remaining)?;
        return Ok((
            remaining,
            ProteinSubstitution::Change {
                reference,
                position,
                new: ProteinAllele::Residue(new),
                mosaic: true,
            },
        ));
    }
    if let Some(remaining) = remaining.strip_prefix('=') {
        return Ok((remaining, ProteinSubstitution::Silent { reference, position }));
    }
    if let Some(remaining) = remaining.strip_prefix('?') {
        return Ok((remaining, ProteinSubstitution::Unknown { reference, position }));
    }

    let (remaining, first) = amino_acid(remaining)?;
    let (remaining, others) = many0(preceded(char('^'), amino_acid)).parse(remaining)?;
    let new = if others.is_empty() {
        ProteinAllele::Residue(first)
    } else {
        ProteinAllele::Choice(std::iter::once(first).chain(others).collect())
    };
    Ok((
        remaining,
        ProteinSubstitution::Change {
            reference,
            position,
            new,
            mosaic: false,
        },
    ))
}

// ---- Deletion

/// `Lys23_Val25del`, `Val7del`, `Val7=/del`
pub fn deletion(input: &str) -> IResult<&str, ProteinDeletion> {
    alt((
        all_consuming(interval_deletion),
        all_consuming(site_deletion),
    ))
    .parse(input)
}

fn interval_deletion(input: &str) -> IResult<&str, ProteinDeletion> {
    let (remaining, interval) = prot_interval(input)?;
    let (remaining, _) = tag("del").parse(remaining)?;
    Ok((
        remaining,
        ProteinDeletion {
            locus: ProtLocus::Range(interval),
            mosaic: false,
        },
    ))
}

fn site_deletion(input: &str) -> IResult<&str, ProteinDeletion> {
    let (remaining, position) = protein_position(input)?;
    let (remaining, mosaic) = opt(tag("=/")).parse(remaining)?;
    let (remaining, _) = tag("del").parse(remaining)?;
    Ok((
        remaining,
        ProteinDeletion {
            locus: ProtLocus::Site(position),
            mosaic: mosaic.is_some(),
        },
    ))
}

// ---- Insertion and deletion-insertion

/// Inserted residues: `AlaSer`, `Ala^Ser`, `5`, `(5)`, `XXX`
fn inserted(input: &str) -> IResult<&str, ProteinInserted> {
    alt((
        inserted_residues,
        map(count, ProteinInserted::Length),
        map(delimited(char('('), count, char(')')), ProteinInserted::UncertainLength),
        map(take_while1(|c: char| c == 'X'), |xs: &str| {
            ProteinInserted::Unspecified(xs.len())
        }),
    ))
    .parse(input)
}

fn inserted_residues(input: &str) -> IResult<&str, ProteinInserted> {
    let (remaining, first) = amino_acid(input)?;
    if remaining.starts_with('^') {
        let (remaining, others) = many1(preceded(char('^'), amino_acid)).parse(remaining)?;
        let choice: Vec<AminoAcid> = std::iter::once(first).chain(others).collect();
        return Ok((remaining, ProteinInserted::Choice(choice)));
    }
    let (remaining, others) = many0(amino_acid).parse(remaining)?;
    let residues: Vec<AminoAcid> = std::iter::once(first).chain(others).collect();
    Ok((remaining, ProteinInserted::Residues(residues)))
}

/// `His4_Gln5insAla`
pub fn insertion(input: &str) -> IResult<&str, ProteinInsertion> {
    all_consuming(insertion_event).parse(input)
}

fn insertion_event(input: &str) -> IResult<&str, ProteinInsertion> {
    let (remaining, site) = prot_interval(input)?;
    let (remaining, _) = tag("ins").parse(remaining)?;
    let (remaining, inserted) = inserted(remaining)?;
    Ok((remaining, ProteinInsertion { site, inserted }))
}

/// `Cys28delinsTrpVal`, `Lys23_Val25delins(3)`
pub fn delins(input: &str) -> IResult<&str, ProteinDelins> {
    all_consuming(delins_event).parse(input)
}

fn delins_event(input: &str) -> IResult<&str, ProteinDelins> {
    let (remaining, locus) = alt((
        map(prot_interval, ProtLocus::Range),
        map(protein_position, ProtLocus::Site),
    ))
    .parse(input)?;
    let (remaining, _) = tag("delins").parse(remaining)?;
    let (remaining, inserted) = inserted(remaining)?;
    Ok((remaining, ProteinDelins { locus, inserted }))
}

// ---- Frame shift

/// `Arg97ProfsTer23`, `Arg97fs`, `Arg97Profs*?`
pub fn frame_shift(input: &str) -> IResult<&str, ProteinFrameShift> {
    all_consuming(frame_shift_event).parse(input)
}

fn frame_shift_event(input: &str) -> IResult<&str, ProteinFrameShift> {
    let (remaining, reference) = amino_acid(input)?;
    let (remaining, position) = count(remaining)?;
    let (remaining, new) = opt(amino_acid).parse(remaining)?;
    let (remaining, _) = tag("fs").parse(remaining)?;
    let (remaining, stop) = opt(frame_shift_stop).parse(remaining)?;
    Ok((
        remaining,
        ProteinFrameShift {
            reference,
            position,
            new,
            stop,
        },
    ))
}

/// `Ter23`, `*23`, `Ter?`, `*?`
fn frame_shift_stop(input: &str) -> IResult<&str, FrameShiftStop> {
    let (remaining, residue) = amino_acid(input)?;
    if let Some(remaining) = remaining.strip_prefix('?') {
        return Ok((
            remaining,
            FrameShiftStop {
                residue,
                distance: None,
            },
        ));
    }
    let (remaining, distance) = count(remaining)?;
    Ok((
        remaining,
        FrameShiftStop {
            residue,
            distance: Some(distance),
        },
    ))
}
