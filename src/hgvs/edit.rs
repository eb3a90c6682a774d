//! Capture records for recognized events
//!
//! Every event kind has its own record per level family. The grammars build
//! these and the validators check them; nothing is keyed by string.

use super::interval::{NaInterval, ProtInterval};
use super::location::{AminoAcid, Position, ProtPos};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mosaic (`=/`) or chimeric (`=//`) marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MosaicMarker {
    Mosaic,
    Chimeric,
}

impl MosaicMarker {
    pub fn as_str(&self) -> &'static str {
        match self {
            MosaicMarker::Mosaic => "=/",
            MosaicMarker::Chimeric => "=//",
        }
    }
}

impl fmt::Display for MosaicMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whole-event RNA transcript effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TranscriptEffect {
    /// `0`: no RNA produced
    NoProduct,
    /// `?`: effect unknown
    Unknown,
    /// `spl`: splicing affected
    Splice,
}

/// Where a nucleotide event applies
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NaLocus {
    /// `19`
    Site(Position),
    /// `19_21`
    Range(NaInterval),
    /// `(4072_5145)`
    Uncertain(NaInterval),
    /// `(4071+1_4072-1)_(5154+1_5155-1)`
    Breakpoint {
        start: NaInterval,
        end: NaInterval,
    },
}

/// Nucleotide substitution, silent allele or transcript effect
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NaSubstitution {
    /// `76A>T`, `54=/T>C`
    Change {
        position: Position,
        reference: char,
        new: char,
        mosaic: Option<MosaicMarker>,
    },
    /// `54=`, or `=` for the whole sequence
    Silent { position: Option<Position> },
    /// RNA only: `0`, `?`, `spl`
    TranscriptEffect(TranscriptEffect),
}

/// Nucleotide deletion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NaDeletion {
    pub locus: NaLocus,
    /// Deleted base named after a single-site deletion (`19delT`)
    pub deleted: Option<char>,
    pub mosaic: Option<MosaicMarker>,
}

/// What a nucleotide insertion or deletion-insertion inserts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NaInserted {
    /// `insAGT`
    Bases(String),
    /// `ins(100)`
    Length(u64),
    /// RNA only: `ins[2950-30_2950-12;2950-4_2950-1]`
    Intervals(Vec<NaInterval>),
}

/// Nucleotide insertion, between `Range` flanks or in an `Uncertain` range
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NaInsertion {
    pub locus: NaLocus,
    pub inserted: NaInserted,
}

/// Nucleotide deletion-insertion at a `Site` or `Range`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NaDelins {
    pub locus: NaLocus,
    pub inserted: NaInserted,
}

/// New residue of a protein substitution
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProteinAllele {
    /// `Cys`, `Ter` or `*`
    Residue(AminoAcid),
    /// `Cys^Ser^Trp`
    Choice(Vec<AminoAcid>),
}

/// Protein substitution and its whole-protein forms
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProteinSubstitution {
    /// `Trp24Cys`, `Trp24*`, `Trp24=/Cys`
    Change {
        reference: AminoAcid,
        position: u64,
        new: ProteinAllele,
        mosaic: bool,
    },
    /// `Cys188=`
    Silent { reference: AminoAcid, position: u64 },
    /// `Trp24?`
    Unknown { reference: AminoAcid, position: u64 },
    /// `0`
    NoProtein,
    /// `?`
    NotPredicted,
    /// `=`
    Identity,
}

/// Where a protein deletion or deletion-insertion applies
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtLocus {
    Site(ProtPos),
    Range(ProtInterval),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProteinDeletion {
    pub locus: ProtLocus,
    /// `Val7=/del`
    pub mosaic: bool,
}

/// What a protein insertion or deletion-insertion inserts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProteinInserted {
    /// `AlaSer`
    Residues(Vec<AminoAcid>),
    /// `Ala^Ser`
    Choice(Vec<AminoAcid>),
    /// `insN` with N residues
    Length(u64),
    /// `ins(N)`
    UncertainLength(u64),
    /// `insXXX`
    Unspecified(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProteinInsertion {
    pub site: ProtInterval,
    pub inserted: ProteinInserted,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProteinDelins {
    pub locus: ProtLocus,
    pub inserted: ProteinInserted,
}

/// New stop codon after a frame-shift: `Ter23`, `*23`, `*?`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameShiftStop {
    pub residue: AminoAcid,
    /// `None` for `?`
    pub distance: Option<u64>,
}

/// `Arg97ProfsTer23`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProteinFrameShift {
    pub reference: AminoAcid,
    pub position: u64,
    /// First amino acid of the shifted frame
    pub new: Option<AminoAcid>,
    pub stop: Option<FrameShiftStop>,
}

/// Enrich-style legacy markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegacyToken {
    /// `_wt`
    WildType,
    /// `_sy`
    Synonymous,
}

impl LegacyToken {
    pub fn from_token(s: &str) -> Option<Self> {
        [LegacyToken::WildType, LegacyToken::Synonymous]
            .into_iter()
            .find(|token| token.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LegacyToken::WildType => "_wt",
            LegacyToken::Synonymous => "_sy",
        }
    }

    /// Current notation for the same meaning
    pub fn replacement(&self) -> &'static str {
        match self {
            LegacyToken::WildType => "c.= (or g., n., p. as appropriate)",
            LegacyToken::Synonymous => "p.(=)",
        }
    }
}

/// Typed captures of one event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCaptures {
    NaSubstitution(NaSubstitution),
    NaDeletion(NaDeletion),
    NaInsertion(NaInsertion),
    NaDelins(NaDelins),
    ProteinSubstitution(ProteinSubstitution),
    ProteinDeletion(ProteinDeletion),
    ProteinInsertion(ProteinInsertion),
    ProteinDelins(ProteinDelins),
    ProteinFrameShift(ProteinFrameShift),
    Legacy(LegacyToken),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mosaic_marker_str() {
        assert_eq!(MosaicMarker::Mosaic.as_str(), "=/");
        assert_eq!(MosaicMarker::Chimeric.to_string(), "=//");
    }

    #[test]
    fn test_legacy_tokens() {
        assert_eq!(LegacyToken::from_token("_wt"), Some(LegacyToken::WildType));
        assert_eq!(LegacyToken::from_token("_sy"), Some(LegacyToken::Synonymous));
        assert_eq!(LegacyToken::from_token("_xx"), None);
        assert_eq!(LegacyToken::from_token("_WT"), Some(LegacyToken::WildType));
        assert_eq!(LegacyToken::from_token("_Sy"), Some(LegacyToken::Synonymous));
        assert_eq!(LegacyToken::Synonymous.replacement(), "p.(=)");
    }
}
