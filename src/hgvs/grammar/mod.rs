//! Event grammars
//!
//! nom grammars for positions and for the five event kinds at each level.
//! Multi-variant members are matched with the same single-event grammar as
//! standalone events.

pub mod nucleotide;
pub mod position;
pub mod protein;

pub use nucleotide::{NucleotideGrammar, DNA, RNA};
pub use position::{parse_position, parse_positions, parse_protein_position};

use crate::hgvs::edit::EventCaptures;
use crate::hgvs::variant::MolecularLevel;
use nom::{branch::alt, combinator::map, error::ErrorKind, IResult, Parser};

pub(crate) fn reject(input: &str, kind: ErrorKind) -> nom::Err<nom::error::Error<&str>> {
    nom::Err::Error(nom::error::Error::new(input, kind))
}

impl NucleotideGrammar {
    /// Any single nucleotide event
    pub fn any_event<'a>(&self, input: &'a str) -> IResult<&'a str, EventCaptures> {
        alt((
            map(|i| self.delins(i), EventCaptures::NaDelins),
            map(|i| self.insertion(i), EventCaptures::NaInsertion),
            map(|i| self.deletion(i), EventCaptures::NaDeletion),
            map(|i| self.substitution(i), EventCaptures::NaSubstitution),
        ))
        .parse(input)
    }
}

/// Any single protein event
pub fn protein_event(input: &str) -> IResult<&str, EventCaptures> {
    alt((
        map(protein::frame_shift, EventCaptures::ProteinFrameShift),
        map(protein::delins, EventCaptures::ProteinDelins),
        map(protein::insertion, EventCaptures::ProteinInsertion),
        map(protein::deletion, EventCaptures::ProteinDeletion),
        map(protein::substitution, EventCaptures::ProteinSubstitution),
    ))
    .parse(input)
}

/// Match a bare event against the level's single-event grammar
pub fn match_event(level: MolecularLevel, event: &str) -> Option<EventCaptures> {
    let result = match NucleotideGrammar::for_level(level) {
        Some(grammar) => grammar.any_event(event),
        None => protein_event(event),
    };
    result.ok().map(|(_, captures)| captures)
}
