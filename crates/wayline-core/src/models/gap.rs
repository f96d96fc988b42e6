//! Gap values: detected discontinuities between adjacent segments.
//!
//! Gaps are derived and ephemeral: computed by the Continuity Validator,
//! consumed by the Gap Inference Engine or the caller, never persisted.

use serde::{Deserialize, Serialize};

/// What kind of discontinuity was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapType {
    /// Arrival and next departure are different places.
    LocationMismatch,
    /// The later segment starts before the earlier one ends. Informational;
    /// does not imply a missing segment.
    TimeOverlap,
    /// Continuous locations, but the idle time between segments exceeds
    /// the configured threshold. Informational.
    IdleWindow,
}

/// What kind of connective segment would plausibly close the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedSegmentType {
    Flight,
    Transfer,
    None,
}

/// A discontinuity between a segment and its chronological successor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    /// The chronologically earlier segment.
    pub before_id: String,
    /// Its successor in the temporal index.
    pub after_id: String,
    pub gap_type: GapType,
    pub suggested: SuggestedSegmentType,
    /// `after.start - before.end` in seconds; negative for overlaps.
    pub idle_seconds: i64,
    /// Human-readable description for the agent/UI.
    pub description: String,
}
