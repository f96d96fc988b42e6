use serde::{Deserialize, Serialize};

use super::Itinerary;

/// How far a segment move cascades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CascadeMode {
    /// Shift everything chronologically downstream of the moved segment
    /// by the same delta, preserving every downstream gap exactly.
    Auto,
    /// Shift only the chronologically next segment per traveler shared
    /// with the moved segment; the caller accepts any residual
    /// inconsistency and may re-run the Continuity Validator.
    DependenciesOnly,
}

/// Result of a batch gap fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapFillOutcome {
    /// The input itinerary with accepted candidates inserted.
    pub itinerary: Itinerary,
    /// Ids of the inserted (inferred) segments, in insertion order.
    pub inserted: Vec<String>,
}
