//! Variant types
//!
//! A [`VariantExpression`] is either one [`VariantEvent`] or a bracketed,
//! duplicate-free set of at least two.

use super::edit::EventCaptures;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological level of a description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MolecularLevel {
    Dna,
    Rna,
    Protein,
}

impl MolecularLevel {
    /// `c n g m` are DNA, `r` is RNA, `p` is protein
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'c' | 'n' | 'g' | 'm' => Some(MolecularLevel::Dna),
            'r' => Some(MolecularLevel::Rna),
            'p' => Some(MolecularLevel::Protein),
            _ => None,
        }
    }

    /// Level prefixes accepted for this level
    pub const fn prefixes(&self) -> &'static [char] {
        match self {
            MolecularLevel::Dna => &['c', 'n', 'g', 'm'],
            MolecularLevel::Rna => &['r'],
            MolecularLevel::Protein => &['p'],
        }
    }

    /// Separators between multi-variant members
    pub const fn separators(&self) -> &'static [char] {
        match self {
            MolecularLevel::Rna => &[';', ','],
            MolecularLevel::Dna | MolecularLevel::Protein => &[';'],
        }
    }
}

impl fmt::Display for MolecularLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MolecularLevel::Dna => write!(f, "DNA"),
            MolecularLevel::Rna => write!(f, "RNA"),
            MolecularLevel::Protein => write!(f, "protein"),
        }
    }
}

/// Event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Substitution,
    Deletion,
    Insertion,
    Delins,
    /// Protein only
    FrameShift,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Substitution => write!(f, "substitution"),
            EventKind::Deletion => write!(f, "deletion"),
            EventKind::Insertion => write!(f, "insertion"),
            EventKind::Delins => write!(f, "deletion-insertion"),
            EventKind::FrameShift => write!(f, "frame shift"),
        }
    }
}

/// One recognized event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantEvent {
    pub kind: EventKind,
    pub level: MolecularLevel,
    /// Event text without level prefix or predicted wrapper
    pub raw: String,
    pub captures: EventCaptures,
    /// Written inside `p.(...)`
    pub predicted: bool,
}

impl VariantEvent {
    pub fn new(
        kind: EventKind,
        level: MolecularLevel,
        raw: impl Into<String>,
        captures: EventCaptures,
    ) -> Self {
        Self {
            kind,
            level,
            raw: raw.into(),
            captures,
            predicted: false,
        }
    }

    pub fn predicted(mut self, predicted: bool) -> Self {
        self.predicted = predicted;
        self
    }
}

impl fmt::Display for VariantEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.predicted {
            write!(f, "({})", self.raw)
        } else {
            write!(f, "{}", self.raw)
        }
    }
}

/// A validated description
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantExpression {
    Single(VariantEvent),
    /// Two or more distinct events
    Multi(Vec<VariantEvent>),
}

impl VariantExpression {
    pub fn events(&self) -> &[VariantEvent] {
        match self {
            VariantExpression::Single(event) => std::slice::from_ref(event),
            VariantExpression::Multi(events) => events,
        }
    }

    pub fn level(&self) -> Option<MolecularLevel> {
        self.events().first().map(|e| e.level)
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, VariantExpression::Multi(_))
    }
}
