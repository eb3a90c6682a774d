//! Position grammar
//!
//! Token-level parsers for nucleotide positions (`76`, `-123+45`, `*183`,
//! `93+?`, `?`), amino acids and protein positions (`Trp24`, `?`).

use super::reject;
use crate::error::ValidationError;
use crate::hgvs::interval::{NaInterval, ProtInterval};
use crate::hgvs::location::{AminoAcid, Anchor, Offset, Position, ProtPos};
use nom::{
    branch::alt,
    character::complete::{char, digit1},
    combinator::{all_consuming, opt},
    error::ErrorKind,
    IResult, Parser,
};

/// 1-based number. Zero and overflowing values are rejected.
pub fn count(input: &str) -> IResult<&str, u64> {
    let (remaining, s) = digit1.parse(input)?;
    let value: u64 = s.parse().map_err(|_| reject(input, ErrorKind::Digit))?;
    if value == 0 {
        return Err(reject(input, ErrorKind::Verify));
    }
    Ok((remaining, value))
}

/// Intronic offset: `+5`, `-10`, `+?`, `-?`
fn offset(input: &str) -> IResult<&str, Offset> {
    let (input, sign) = alt((char('+'), char('-'))).parse(input)?;

    if let Some(remaining) = input.strip_prefix('?') {
        let offset = if sign == '+' {
            Offset::UnknownDownstream
        } else {
            Offset::UnknownUpstream
        };
        return Ok((remaining, offset));
    }

    let (remaining, value) = count(input)?;
    let value = i64::try_from(value).map_err(|_| reject(input, ErrorKind::Digit))?;
    let signed = if sign == '-' { -value } else { value };
    Ok((remaining, Offset::Known(signed)))
}

/// Nucleotide position
#[inline]
pub fn position(input: &str) -> IResult<&str, Position> {
    if let Some(remaining) = input.strip_prefix('?') {
        return Ok((remaining, Position::Unknown));
    }

    let (remaining, anchor) = if let Some(rest) = input.strip_prefix('*') {
        let (rest, n) = count(rest)?;
        (rest, Anchor::Downstream(n))
    } else if let Some(rest) = input.strip_prefix('-') {
        let (rest, n) = count(rest)?;
        (rest, Anchor::Upstream(n))
    } else {
        let (rest, n) = count(input)?;
        (rest, Anchor::Coding(n))
    };

    let (remaining, offset) = opt(offset).parse(remaining)?;
    Ok((remaining, Position::Site { anchor, offset }))
}

/// Apply a `*` on the start to an unmarked end: `*183_186` is `*183_*186`
fn carry_downstream(start: &Position, end: Position) -> Position {
    match (start, end) {
        (
            Position::Site {
                anchor: Anchor::Downstream(_),
                ..
            },
            Position::Site {
                anchor: Anchor::Coding(n),
                offset,
            },
        ) => Position::Site {
            anchor: Anchor::Downstream(n),
            offset,
        },
        (_, end) => end,
    }
}

/// `start_end`
pub fn na_interval(input: &str) -> IResult<&str, NaInterval> {
    let (remaining, start) = position(input)?;
    let (remaining, _) = char('_').parse(remaining)?;
    let (remaining, end) = position(remaining)?;
    let end = carry_downstream(&start, end);
    Ok((remaining, NaInterval::new(start, end)))
}

/// Three-letter amino acid, or `*` for the stop codon
#[inline]
pub fn amino_acid(input: &str) -> IResult<&str, AminoAcid> {
    if let Some(remaining) = input.strip_prefix('*') {
        return Ok((remaining, AminoAcid::Ter));
    }
    let code = input.get(..3).ok_or_else(|| reject(input, ErrorKind::Eof))?;
    let aa = AminoAcid::from_three_letter(code).ok_or_else(|| reject(input, ErrorKind::Tag))?;
    Ok((&input[3..], aa))
}

/// `Trp24` or `?`
pub fn protein_position(input: &str) -> IResult<&str, ProtPos> {
    if let Some(remaining) = input.strip_prefix('?') {
        return Ok((remaining, ProtPos::Unknown));
    }
    let (remaining, amino_acid) = amino_acid(input)?;
    let (remaining, number) = count(remaining)?;
    Ok((remaining, ProtPos::Residue { amino_acid, number }))
}

/// `Lys23_Val25`
pub fn prot_interval(input: &str) -> IResult<&str, ProtInterval> {
    let (remaining, start) = protein_position(input)?;
    let (remaining, _) = char('_').parse(remaining)?;
    let (remaining, end) = protein_position(remaining)?;
    Ok((remaining, ProtInterval::new(start, end)))
}

/// Parse a complete nucleotide position token
pub fn parse_position(token: &str) -> Result<Position, ValidationError> {
    all_consuming(position)
        .parse(token)
        .map(|(_, pos)| pos)
        .map_err(|_| ValidationError::MalformedPosition {
            token: token.to_string(),
        })
}

/// Parse the two ends of an interval
///
/// A `*` on the start carries over to an unmarked end.
pub fn parse_positions(
    start_token: &str,
    end_token: &str,
) -> Result<(Position, Position), ValidationError> {
    let start = parse_position(start_token)?;
    let end = parse_position(end_token)?;
    Ok((start, carry_downstream(&start, end)))
}

/// Parse a complete protein position token
pub fn parse_protein_position(token: &str) -> Result<ProtPos, ValidationError> {
    all_consuming(protein_position)
        .parse(token)
        .map(|(_, pos)| pos)
        .map_err(|_| ValidationError::MalformedPosition {
            token: token.to_string(),
        })
}
