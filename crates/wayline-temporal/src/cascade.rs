//! The Cascade Mover: shift a segment in time and carry its dependents
//! with it, or fail without touching anything.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use wayline_core::errors::{EngineError, EngineResult};
use wayline_core::models::{CascadeMode, Itinerary, Segment};
use wayline_core::validation;

use crate::index::TemporalIndex;

/// Move a segment to a new start, cascading per `mode`.
///
/// Algorithm:
/// 1. Locate the target; missing id → `SegmentNotFound`.
/// 2. `delta = new_start - target.start`; zero delta is a no-op clone.
/// 3. Shift the target, preserving its duration.
/// 4. Collect the dependent set (see `CascadeMode`) and shift each member
///    by the same delta, so every downstream gap to its predecessor is
///    preserved exactly.
/// 5. Re-validate every touched segment; any violation (including
///    out-of-range instants from checked arithmetic) aborts the whole
///    move with `AdjustmentFailed`; the input is never half-shifted.
///
/// The returned itinerary still carries the version it was loaded with;
/// persisting it (and surfacing a stale-version conflict) is the
/// caller's job.
pub fn move_segment(
    itinerary: &Itinerary,
    segment_id: &str,
    new_start: DateTime<Utc>,
    mode: CascadeMode,
) -> EngineResult<Itinerary> {
    let target = itinerary
        .segment(segment_id)
        .ok_or_else(|| EngineError::SegmentNotFound {
            id: segment_id.to_string(),
        })?;

    let delta = new_start - target.start;
    if delta.is_zero() {
        debug!(segment_id, "move_segment: zero delta, no-op");
        return Ok(itinerary.clone());
    }

    let affected = dependent_set(itinerary, target, mode);
    debug!(
        segment_id,
        ?mode,
        delta_seconds = delta.num_seconds(),
        affected = affected.len(),
        "move_segment: shifting"
    );

    // All mutation happens on a clone; any failure drops the clone and
    // the caller keeps the untouched input.
    let mut moved = itinerary.clone();
    for id in &affected {
        let segment = moved
            .segment_mut(id)
            .ok_or_else(|| EngineError::Internal(format!("dependent set named unknown segment {id}")))?;
        shift_segment(segment, delta).map_err(|message| EngineError::AdjustmentFailed {
            affected: affected.clone(),
            message,
        })?;
        if let Err(err) = validation::validate_segment(segment) {
            return Err(EngineError::AdjustmentFailed {
                affected: affected.clone(),
                message: err.to_string(),
            });
        }
    }

    Ok(moved)
}

/// Ids to shift, target included. Ordering follows the temporal index so
/// segments with identical starts move together in their original
/// relative order.
fn dependent_set(itinerary: &Itinerary, target: &Segment, mode: CascadeMode) -> Vec<String> {
    let index = TemporalIndex::build(itinerary);
    let mut ids = vec![target.id.clone()];

    match mode {
        CascadeMode::Auto => {
            // Everything that originally started at or after the target's
            // original end is downstream and rides along.
            for entry in index.entries() {
                if entry.id != target.id && entry.start >= target.end {
                    ids.push(entry.id.clone());
                }
            }
        }
        CascadeMode::DependenciesOnly => {
            // Per traveler on the target: that traveler's chronologically
            // next segment, nothing transitive.
            let target_pos = index.position(&target.id).unwrap_or(0);
            for traveler in &target.travelers {
                let next = index.entries()[target_pos + 1..].iter().find(|entry| {
                    itinerary
                        .segment(&entry.id)
                        .is_some_and(|s| s.travelers.contains(traveler))
                });
                if let Some(entry) = next {
                    if !ids.contains(&entry.id) {
                        ids.push(entry.id.clone());
                    }
                }
            }
        }
    }
    ids
}

/// Shift both instants by `delta` with checked arithmetic; an
/// out-of-range result is the abort signal for the whole cascade.
fn shift_segment(segment: &mut Segment, delta: Duration) -> Result<(), String> {
    let start = segment
        .start
        .checked_add_signed(delta)
        .ok_or_else(|| format!("segment {} start out of range after shift", segment.id))?;
    let end = segment
        .end
        .checked_add_signed(delta)
        .ok_or_else(|| format!("segment {} end out of range after shift", segment.id))?;
    segment.start = start;
    segment.end = end;
    Ok(())
}
