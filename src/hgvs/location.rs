//! Position types for nucleotide and protein coordinates
//!
//! Nucleotide positions are 1-based and may sit upstream of the start codon
//! (`-N`), inside the coding region (`N`), or downstream of the stop codon
//! (`*N`). Any of these may carry an intronic offset (`+5`, `-12`, `+?`, `-?`).
//! Genomic, mitochondrial and non-coding coordinates are plain numbers and use
//! the coding anchor.
//!
//! Protein positions are a residue plus a 1-based number, or unknown (`?`).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Exonic anchor of a nucleotide position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    /// `-N`: N bases upstream of the start codon (5' UTR)
    Upstream(u64),
    /// `N`: coding (or plain numeric) coordinate
    Coding(u64),
    /// `*N`: N bases downstream of the stop codon (3' UTR)
    Downstream(u64),
}

impl Anchor {
    /// Region rank: 5' UTR < coding < 3' UTR
    fn rank(&self) -> u8 {
        match self {
            Anchor::Upstream(_) => 0,
            Anchor::Coding(_) => 1,
            Anchor::Downstream(_) => 2,
        }
    }

    /// Signed key within the region. Upstream offsets count down towards the
    /// start codon, so `-100` sorts before `-1`.
    fn key(&self) -> i128 {
        match self {
            Anchor::Upstream(n) => -i128::from(*n),
            Anchor::Coding(n) | Anchor::Downstream(n) => i128::from(*n),
        }
    }
}

impl PartialOrd for Anchor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Anchor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.key().cmp(&other.key()))
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Upstream(n) => write!(f, "-{}", n),
            Anchor::Coding(n) => write!(f, "{}", n),
            Anchor::Downstream(n) => write!(f, "*{}", n),
        }
    }
}

/// Intronic offset from an exonic anchor
///
/// The derived order is the intronic order: `-?` < negative < positive < `+?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Offset {
    /// `-?`
    UnknownUpstream,
    /// `+N` or `-N`, never zero
    Known(i64),
    /// `+?`
    UnknownDownstream,
}

impl Offset {
    pub fn is_unknown(&self) -> bool {
        !matches!(self, Offset::Known(_))
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::UnknownUpstream => write!(f, "-?"),
            Offset::Known(n) if *n > 0 => write!(f, "+{}", n),
            Offset::Known(n) => write!(f, "{}", n),
            Offset::UnknownDownstream => write!(f, "+?"),
        }
    }
}

/// A nucleotide position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// `?`
    Unknown,
    /// An exonic anchor with an optional intronic offset
    Site {
        anchor: Anchor,
        offset: Option<Offset>,
    },
}

impl Position {
    /// Plain coding position without offset
    pub fn coding(n: u64) -> Self {
        Position::Site {
            anchor: Anchor::Coding(n),
            offset: None,
        }
    }

    pub fn upstream(n: u64) -> Self {
        Position::Site {
            anchor: Anchor::Upstream(n),
            offset: None,
        }
    }

    pub fn downstream(n: u64) -> Self {
        Position::Site {
            anchor: Anchor::Downstream(n),
            offset: None,
        }
    }

    /// Attach an intronic offset
    pub fn with_offset(self, offset: Offset) -> Self {
        match self {
            Position::Unknown => Position::Unknown,
            Position::Site { anchor, .. } => Position::Site {
                anchor,
                offset: Some(offset),
            },
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Position::Unknown)
    }

    /// Ordering key, `None` for the unknown position
    fn sort_key(&self) -> Option<(Anchor, Offset)> {
        match self {
            Position::Unknown => None,
            Position::Site { anchor, offset } => {
                Some((*anchor, offset.unwrap_or(Offset::Known(0))))
            }
        }
    }

    /// Compare two positions; `None` when either is unknown
    pub fn compare(&self, other: &Position) -> Option<Ordering> {
        Some(self.sort_key()?.cmp(&other.sort_key()?))
    }

    /// Whether `self` strictly precedes `other`; `None` when not orderable
    pub fn precedes(&self, other: &Position) -> Option<bool> {
        self.compare(other).map(|ord| ord == Ordering::Less)
    }

    /// Whether `next` is the base immediately 3' of `self`
    ///
    /// Returns `None` when the answer depends on the reference: unknown
    /// positions or offsets, intron lengths, and the step from the coding
    /// region into the 3' UTR.
    pub fn is_adjacent_to(&self, next: &Position) -> Option<bool> {
        let (Position::Site { anchor: a, offset: oa }, Position::Site { anchor: b, offset: ob }) =
            (self, next)
        else {
            return None;
        };
        if oa.is_some_and(|o| o.is_unknown()) || ob.is_some_and(|o| o.is_unknown()) {
            return None;
        }
        let off_a = match oa {
            Some(Offset::Known(n)) => *n,
            _ => 0,
        };
        let off_b = match ob {
            Some(Offset::Known(n)) => *n,
            _ => 0,
        };

        if a == b {
            return Some(i128::from(off_b) - i128::from(off_a) == 1);
        }
        if off_a != 0 || off_b != 0 {
            return None;
        }

        match (a, b) {
            (Anchor::Upstream(1), Anchor::Coding(1)) => Some(true),
            (Anchor::Coding(_), Anchor::Downstream(1)) => None,
            _ if a.rank() == b.rank() => Some(b.key() - a.key() == 1),
            _ => Some(false),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Unknown => write!(f, "?"),
            Position::Site { anchor, offset } => {
                write!(f, "{}", anchor)?;
                if let Some(offset) = offset {
                    write!(f, "{}", offset)?;
                }
                Ok(())
            }
        }
    }
}

/// Amino acid three-letter codes (20 standard plus the stop codon)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AminoAcid {
    Ala, // A
    Arg, // R
    Asn, // N
    Asp, // D
    Cys, // C
    Gln, // Q
    Glu, // E
    Gly, // G
    His, // H
    Ile, // I
    Leu, // L
    Lys, // K
    Met, // M
    Phe, // F
    Pro, // P
    Ser, // S
    Thr, // T
    Trp, // W
    Tyr, // Y
    Val, // V
    Ter, // * (stop codon)
}

impl AminoAcid {
    /// Parse from 3-letter code
    pub fn from_three_letter(s: &str) -> Option<Self> {
        match s {
            "Ala" => Some(Self::Ala),
            "Arg" => Some(Self::Arg),
            "Asn" => Some(Self::Asn),
            "Asp" => Some(Self::Asp),
            "Cys" => Some(Self::Cys),
            "Gln" => Some(Self::Gln),
            "Glu" => Some(Self::Glu),
            "Gly" => Some(Self::Gly),
            "His" => Some(Self::His),
            "Ile" => Some(Self::Ile),
            "Leu" => Some(Self::Leu),
            "Lys" => Some(Self::Lys),
            "Met" => Some(Self::Met),
            "Phe" => Some(Self::Phe),
            "Pro" => Some(Self::Pro),
            "Ser" => Some(Self::Ser),
            "Thr" => Some(Self::Thr),
            "Trp" => Some(Self::Trp),
            "Tyr" => Some(Self::Tyr),
            "Val" => Some(Self::Val),
            "Ter" => Some(Self::Ter),
            _ => None,
        }
    }

    /// Get 3-letter code
    pub fn to_three_letter(&self) -> &'static str {
        match self {
            Self::Ala => "Ala",
            Self::Arg => "Arg",
            Self::Asn => "Asn",
            Self::Asp => "Asp",
            Self::Cys => "Cys",
            Self::Gln => "Gln",
            Self::Glu => "Glu",
            Self::Gly => "Gly",
            Self::His => "His",
            Self::Ile => "Ile",
            Self::Leu => "Leu",
            Self::Lys => "Lys",
            Self::Met => "Met",
            Self::Phe => "Phe",
            Self::Pro => "Pro",
            Self::Ser => "Ser",
            Self::Thr => "Thr",
            Self::Trp => "Trp",
            Self::Tyr => "Tyr",
            Self::Val => "Val",
            Self::Ter => "Ter",
        }
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Self::Ter)
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_three_letter())
    }
}

/// A protein position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtPos {
    /// `?`
    Unknown,
    /// Residue and its 1-based number, e.g. `Trp24`
    Residue { amino_acid: AminoAcid, number: u64 },
}

impl ProtPos {
    pub fn new(amino_acid: AminoAcid, number: u64) -> Self {
        ProtPos::Residue { amino_acid, number }
    }

    pub fn number(&self) -> Option<u64> {
        match self {
            ProtPos::Unknown => None,
            ProtPos::Residue { number, .. } => Some(*number),
        }
    }

    /// Whether `self` strictly precedes `other`; `None` when either is unknown
    pub fn precedes(&self, other: &ProtPos) -> Option<bool> {
        Some(self.number()? < other.number()?)
    }

    /// Whether `next` is the residue immediately C-terminal of `self`
    pub fn is_adjacent_to(&self, next: &ProtPos) -> Option<bool> {
        let (a, b) = (self.number()?, next.number()?);
        Some(b.checked_sub(a) == Some(1))
    }
}

impl fmt::Display for ProtPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtPos::Unknown => write!(f, "?"),
            ProtPos::Residue { amino_acid, number } => write!(f, "{}{}", amino_acid, number),
        }
    }
}
