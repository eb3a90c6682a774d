//! Nucleotide event grammar
//!
//! DNA and RNA share one grammar. The levels differ only in their base
//! alphabet, level prefixes, multi-variant separators, and whether the RNA
//! transcript-effect forms (`0`, `?`, `spl`, `ins[...]`) are allowed.
//!
//! Every matcher is anchored at both ends: a branch either consumes the whole
//! event or fails.

use super::position::{count, na_interval, position};
use super::reject;
use crate::hgvs::edit::{
    MosaicMarker, NaDeletion, NaDelins, NaInserted, NaInsertion, NaLocus, NaSubstitution,
    TranscriptEffect,
};
use crate::hgvs::interval::NaInterval;
use crate::hgvs::variant::MolecularLevel;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, one_of},
    combinator::{all_consuming, map, opt, value},
    error::ErrorKind,
    multi::separated_list1,
    sequence::delimited,
    IResult, Parser,
};

/// Level-specific parameters of the nucleotide grammar
#[derive(Debug)]
pub struct NucleotideGrammar {
    pub level: MolecularLevel,
    /// Allowed bases
    pub alphabet: &'static str,
    pub prefixes: &'static [char],
    pub separators: &'static [char],
    /// Whole-event `0`, `?`, `spl` and bracketed interval insertions
    pub transcript_effects: bool,
}

pub static DNA: NucleotideGrammar = NucleotideGrammar {
    level: MolecularLevel::Dna,
    alphabet: "ATCGXNH",
    prefixes: MolecularLevel::Dna.prefixes(),
    separators: MolecularLevel::Dna.separators(),
    transcript_effects: false,
};

pub static RNA: NucleotideGrammar = NucleotideGrammar {
    level: MolecularLevel::Rna,
    alphabet: "augcxnh",
    prefixes: MolecularLevel::Rna.prefixes(),
    separators: MolecularLevel::Rna.separators(),
    transcript_effects: true,
};

/// `=/` or `=//`
fn mosaic(input: &str) -> IResult<&str, MosaicMarker> {
    if let Some(remaining) = input.strip_prefix("=//") {
        return Ok((remaining, MosaicMarker::Chimeric));
    }
    if let Some(remaining) = input.strip_prefix("=/") {
        return Ok((remaining, MosaicMarker::Mosaic));
    }
    Err(reject(input, ErrorKind::Tag))
}

/// Marker between an interval and `del`: `=/`, `=//`, `del=/`, `del=//`
fn suffix_mosaic(input: &str) -> IResult<&str, MosaicMarker> {
    mosaic(input.strip_prefix("del").unwrap_or(input))
}

/// `(start_end)`
fn uncertain_interval(input: &str) -> IResult<&str, NaInterval> {
    delimited(char('('), na_interval, char(')')).parse(input)
}

impl NucleotideGrammar {
    /// Grammar for a nucleotide level
    pub fn for_level(level: MolecularLevel) -> Option<&'static NucleotideGrammar> {
        match level {
            MolecularLevel::Dna => Some(&DNA),
            MolecularLevel::Rna => Some(&RNA),
            MolecularLevel::Protein => None,
        }
    }

    fn base<'a>(&self, input: &'a str) -> IResult<&'a str, char> {
        one_of(self.alphabet).parse(input)
    }

    fn bases<'a>(&self, input: &'a str) -> IResult<&'a str, &'a str> {
        let alphabet = self.alphabet;
        take_while1(move |c: char| alphabet.contains(c)).parse(input)
    }

    // ---- Substitution

    /// `POS REF>NEW`, `POS=/REF>NEW`, `POS=//REF>NEW`, `POS=`, `=`, and for
    /// RNA the whole-event `0`, `?`, `spl`
    pub fn substitution<'a>(&self, input: &'a str) -> IResult<&'a str, NaSubstitution> {
        alt((
            all_consuming(|i| self.transcript_effect(i)),
            all_consuming(value(NaSubstitution::Silent { position: None }, char('='))),
            all_consuming(|i| self.site_substitution(i)),
        ))
        .parse(input)
    }

    fn transcript_effect<'a>(&self, input: &'a str) -> IResult<&'a str, NaSubstitution> {
        if !self.transcript_effects {
            return Err(reject(input, ErrorKind::Verify));
        }
        let (remaining, effect) = alt((
            value(TranscriptEffect::Splice, tag("spl")),
            value(TranscriptEffect::NoProduct, tag("0")),
            value(TranscriptEffect::Unknown, tag("?")),
        ))
        .parse(input)?;
        Ok((remaining, NaSubstitution::TranscriptEffect(effect)))
    }

    fn site_substitution<'a>(&self, input: &'a str) -> IResult<&'a str, NaSubstitution> {
        let (remaining, position) = position(input)?;
        let (remaining, mosaic) = opt(mosaic).parse(remaining)?;

        if mosaic.is_none() {
            if let Some(remaining) = remaining.strip_prefix('=') {
                let silent = NaSubstitution::Silent {
                    position: Some(position),
                };
                return Ok((remaining, silent));
            }
        }

        let (remaining, reference) = self.base(remaining)?;
        let (remaining, _) = tag(">").parse(remaining)?;
        let (remaining, new) = self.base(remaining)?;
        Ok((
            remaining,
            NaSubstitution::Change {
                position,
                reference,
                new,
                mosaic,
            },
        ))
    }

    // ---- Deletion

    /// `19_21del`, `19_21=/del`, `19_21del=//del`, `=/6_8del`,
    /// `(4072_5145)del`, `(I)_(I)del`, `19del`, `19delT`
    pub fn deletion<'a>(&self, input: &'a str) -> IResult<&'a str, NaDeletion> {
        alt((
            all_consuming(interval_deletion),
            all_consuming(breakpoint_deletion),
            all_consuming(uncertain_deletion),
            all_consuming(|i| self.site_deletion(i)),
        ))
        .parse(input)
    }

    fn site_deletion<'a>(&self, input: &'a str) -> IResult<&'a str, NaDeletion> {
        let (remaining, position) = position(input)?;
        let (remaining, _) = tag("del").parse(remaining)?;
        let (remaining, deleted) = opt(|i| self.base(i)).parse(remaining)?;
        Ok((
            remaining,
            NaDeletion {
                locus: NaLocus::Site(position),
                deleted,
                mosaic: None,
            },
        ))
    }

    // ---- Insertion

    /// `169_170insA`, `32717298_32717299ins(100)`, `(222_226)insG`, and for
    /// RNA `2949_2950ins[2950-30_2950-12;2950-4_2950-1]`
    pub fn insertion<'a>(&self, input: &'a str) -> IResult<&'a str, NaInsertion> {
        all_consuming(|i| self.insertion_event(i)).parse(input)
    }

    fn insertion_event<'a>(&self, input: &'a str) -> IResult<&'a str, NaInsertion> {
        let (remaining, locus) = alt((
            map(na_interval, NaLocus::Range),
            map(uncertain_interval, NaLocus::Uncertain),
        ))
        .parse(input)?;
        let (remaining, _) = tag("ins").parse(remaining)?;
        let (remaining, inserted) = alt((
            |i| self.interval_list(i),
            |i| self.inserted_sequence(i),
        ))
        .parse(remaining)?;
        Ok((remaining, NaInsertion { locus, inserted }))
    }

    /// `[I;I...]` with at least two intervals
    fn interval_list<'a>(&self, input: &'a str) -> IResult<&'a str, NaInserted> {
        if !self.transcript_effects {
            return Err(reject(input, ErrorKind::Verify));
        }
        let (remaining, intervals) =
            delimited(char('['), separated_list1(char(';'), na_interval), char(']'))
                .parse(input)?;
        if intervals.len() < 2 {
            return Err(reject(input, ErrorKind::Many1));
        }
        Ok((remaining, NaInserted::Intervals(intervals)))
    }

    /// Bases or a parenthesized length
    fn inserted_sequence<'a>(&self, input: &'a str) -> IResult<&'a str, NaInserted> {
        if let Ok((remaining, bases)) = self.bases(input) {
            return Ok((remaining, NaInserted::Bases(bases.to_string())));
        }
        let (remaining, length) = delimited(char('('), count, char(')')).parse(input)?;
        Ok((remaining, NaInserted::Length(length)))
    }

    // ---- Deletion-insertion

    /// `6775delinsGA`, `?_6777delinsC`, `9002_9009delins(5)`
    pub fn delins<'a>(&self, input: &'a str) -> IResult<&'a str, NaDelins> {
        all_consuming(|i| self.delins_event(i)).parse(input)
    }

    fn delins_event<'a>(&self, input: &'a str) -> IResult<&'a str, NaDelins> {
        let (remaining, locus) =
            alt((map(na_interval, NaLocus::Range), map(position, NaLocus::Site))).parse(input)?;
        let (remaining, _) = tag("delins").parse(remaining)?;
        let (remaining, inserted) = self.inserted_sequence(remaining)?;
        Ok((remaining, NaDelins { locus, inserted }))
    }
}

/// Interval deletion with an optional prefixed or suffixed mosaic marker
fn interval_deletion(input: &str) -> IResult<&str, NaDeletion> {
    let (remaining, prefix) = opt(mosaic).parse(input)?;
    let (remaining, interval) = na_interval(remaining)?;
    let (remaining, suffix) = if prefix.is_none() {
        opt(suffix_mosaic).parse(remaining)?
    } else {
        (remaining, None)
    };
    let (remaining, _) = tag("del").parse(remaining)?;
    Ok((
        remaining,
        NaDeletion {
            locus: NaLocus::Range(interval),
            deleted: None,
            mosaic: prefix.or(suffix),
        },
    ))
}

/// `(I)_(I)del`
fn breakpoint_deletion(input: &str) -> IResult<&str, NaDeletion> {
    let (remaining, start) = uncertain_interval(input)?;
    let (remaining, _) = char('_').parse(remaining)?;
    let (remaining, end) = uncertain_interval(remaining)?;
    let (remaining, _) = tag("del").parse(remaining)?;
    Ok((
        remaining,
        NaDeletion {
            locus: NaLocus::Breakpoint { start, end },
            deleted: None,
            mosaic: None,
        },
    ))
}

/// `(I)del`
fn uncertain_deletion(input: &str) -> IResult<&str, NaDeletion> {
    let (remaining, interval) = uncertain_interval(input)?;
    let (remaining, _) = tag("del").parse(remaining)?;
    Ok((
        remaining,
        NaDeletion {
            locus: NaLocus::Uncertain(interval),
            deleted: None,
            mosaic: None,
        },
    ))
}
