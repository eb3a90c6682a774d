//! Event classification
//!
//! The kind of an event is inferred from its text with an ordered rule table.
//! Order matters: `delins` contains both `del` and `ins`, so it is tested
//! first, then `ins`, then `del`, then `fs`. Anything else is a substitution.

use crate::hgvs::variant::EventKind;
use tracing::debug;

/// Ordered substring rules; the first match wins
pub const CLASSIFICATION_RULES: [(&str, EventKind); 4] = [
    ("delins", EventKind::Delins),
    ("ins", EventKind::Insertion),
    ("del", EventKind::Deletion),
    ("fs", EventKind::FrameShift),
];

/// Infer the kind of a bare event
pub fn infer_kind(event: &str) -> EventKind {
    let kind = CLASSIFICATION_RULES
        .iter()
        .find(|(marker, _)| event.contains(marker))
        .map(|(_, kind)| *kind)
        .unwrap_or(EventKind::Substitution);
    debug!(event = %event, ?kind, "classified event");
    kind
}
