//! HGVS types, grammars and validators
//!
//! Positions and intervals, typed capture records for each event kind, the
//! nom grammars for DNA, RNA and protein events, the event classifier, the
//! per-kind validators and the single/multi-variant recognizer.

pub mod classify;
pub mod edit;
pub mod grammar;
pub mod interval;
pub mod location;
pub mod recognizer;
pub mod validate;
pub mod variant;

// Re-export commonly used types
pub use classify::infer_kind;
pub use edit::{EventCaptures, LegacyToken, MosaicMarker};
pub use interval::{Coordinate, Interval, NaInterval, ProtInterval};
pub use location::{AminoAcid, Anchor, Offset, Position, ProtPos};
pub use recognizer::Recognizer;
pub use validate::validate_event;
pub use variant::{EventKind, MolecularLevel, VariantEvent, VariantExpression};
