//! Interval types shared by nucleotide and protein events
//!
//! Intervals are written `start_end` and cover deletions, insertion sites
//! and deletion-insertions.

use super::location::{Position, ProtPos};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A coordinate that can be ordered and stepped along a sequence
///
/// Both answers are `None` when they cannot be decided without a reference.
pub trait Coordinate {
    fn precedes(&self, other: &Self) -> Option<bool>;
    fn is_adjacent_to(&self, next: &Self) -> Option<bool>;
}

impl Coordinate for Position {
    fn precedes(&self, other: &Self) -> Option<bool> {
        Position::precedes(self, other)
    }

    fn is_adjacent_to(&self, next: &Self) -> Option<bool> {
        Position::is_adjacent_to(self, next)
    }
}

impl Coordinate for ProtPos {
    fn precedes(&self, other: &Self) -> Option<bool> {
        ProtPos::precedes(self, other)
    }

    fn is_adjacent_to(&self, next: &Self) -> Option<bool> {
        ProtPos::is_adjacent_to(self, next)
    }
}

/// `start_end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval<T> {
    pub start: T,
    pub end: T,
}

/// Nucleotide interval, e.g. `19_21` or `4072-1234_5155-246`
pub type NaInterval = Interval<Position>;

/// Protein interval, e.g. `Lys23_Val25`
pub type ProtInterval = Interval<ProtPos>;

impl<T> Interval<T> {
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }
}

impl<T: Coordinate> Interval<T> {
    /// Start strictly precedes end, `None` when either end is not orderable
    pub fn is_ordered(&self) -> Option<bool> {
        self.start.precedes(&self.end)
    }

    /// Start and end are adjacent, as required of an insertion site
    pub fn is_flanking(&self) -> Option<bool> {
        self.start.is_adjacent_to(&self.end)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.start, self.end)
    }
}
