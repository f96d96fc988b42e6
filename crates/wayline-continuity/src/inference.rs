//! The Gap Inference Engine: synthesize candidate connective segments.
//!
//! Candidates are returned rather than inserted, except in `fill_gaps` batch
//! mode, which inserts every candidate above the confidence threshold.
//! Existing segments are never overwritten either way.

use tracing::{debug, info};

use wayline_core::config::ContinuityConfig;
use wayline_core::errors::{EngineError, EngineResult};
use wayline_core::models::{
    Confidence, FlightDetails, Gap, GapFillOutcome, Inference, Itinerary, Segment, SegmentKind,
    SegmentSource, SegmentStatus, SuggestedSegmentType, TransferDetails, TransferMode,
};

use crate::location;
use crate::validator::validate_continuity;

/// Build a candidate segment that exactly fills a detected gap.
///
/// The candidate spans `[before.end, after.start]`, copies its endpoints
/// from the bounding segments, carries the travelers the two share (the
/// earlier segment's when disjoint), and is marked inferred with a
/// confidence derived from how certain the classification was:
/// code-backed country mismatch with a long idle window scores highest,
/// bare city-string comparison lowest.
///
/// Returns `Ok(None)` when the gap suggests nothing, or when the window
/// is inverted (`before.end > after.start`, an overlap that should have
/// been reported as such, not filled).
pub fn infer_gap_filler(
    itinerary: &Itinerary,
    gap: &Gap,
    config: &ContinuityConfig,
) -> EngineResult<Option<Segment>> {
    let before = itinerary
        .segment(&gap.before_id)
        .ok_or_else(|| EngineError::SegmentNotFound {
            id: gap.before_id.clone(),
        })?;
    let after = itinerary
        .segment(&gap.after_id)
        .ok_or_else(|| EngineError::SegmentNotFound {
            id: gap.after_id.clone(),
        })?;

    if gap.suggested == SuggestedSegmentType::None || before.end > after.start {
        return Ok(None);
    }

    let from = before.arrival_location().clone();
    let to = after.departure_location().clone();
    let confidence = score(before, after, config);
    let reason = format!("closes a detected gap: {}", gap.description);

    // None was handled above; anything that is not a flight is a transfer.
    let kind = match gap.suggested {
        SuggestedSegmentType::Flight => SegmentKind::Flight(FlightDetails {
            origin: from,
            destination: to,
            carrier: None,
            flight_number: None,
        }),
        _ => SegmentKind::Transfer(TransferDetails {
            pickup: from,
            dropoff: to,
            mode: TransferMode::Other,
        }),
    };

    let mut travelers = before.shared_travelers(after);
    if travelers.is_empty() {
        travelers = before.travelers.clone();
    }

    let candidate = Segment {
        id: Segment::new_id(),
        kind,
        status: SegmentStatus::Tentative,
        start: before.end,
        end: after.start,
        travelers,
        source: SegmentSource::Agent,
        inference: Some(Inference {
            reason,
            confidence,
        }),
    };
    debug!(
        before = %gap.before_id,
        after = %gap.after_id,
        confidence = %confidence,
        "infer_gap_filler: candidate built"
    );
    Ok(Some(candidate))
}

/// Batch mode: validate, infer, insert every candidate at or above
/// `threshold`, and report what was inserted.
///
/// The input is untouched; the returned itinerary carries the inserted
/// segments, each placed immediately after its `before` segment in
/// display order.
pub fn fill_gaps(
    itinerary: &Itinerary,
    threshold: f64,
    config: &ContinuityConfig,
) -> EngineResult<GapFillOutcome> {
    let gaps = validate_continuity(itinerary, config);

    let mut filled = itinerary.clone();
    let mut inserted = Vec::new();
    for gap in &gaps {
        if gap.suggested == SuggestedSegmentType::None {
            continue;
        }
        let Some(candidate) = infer_gap_filler(itinerary, gap, config)? else {
            continue;
        };
        let confidence = candidate
            .inference
            .as_ref()
            .map(|i| i.confidence.value())
            .unwrap_or(0.0);
        if confidence < threshold {
            debug!(
                before = %gap.before_id,
                confidence,
                threshold,
                "fill_gaps: candidate below threshold, skipped"
            );
            continue;
        }

        let position = filled
            .position(&gap.before_id)
            .map(|p| p + 1)
            .unwrap_or(filled.len());
        inserted.push(candidate.id.clone());
        filled.insert_segment_at(position, candidate);
    }

    info!(
        itinerary_id = %itinerary.id,
        gaps = gaps.len(),
        inserted = inserted.len(),
        "fill_gaps"
    );
    Ok(GapFillOutcome {
        itinerary: filled,
        inserted,
    })
}

/// Confidence for a candidate filling the window between two segments.
fn score(before: &Segment, after: &Segment, config: &ContinuityConfig) -> Confidence {
    let arrival = before.arrival_location();
    let departure = after.departure_location();
    let matched = location::compare(arrival, departure);
    let idle = after.start - before.end;

    let base = match matched {
        location::LocationMatch::DifferentCountry if location::both_coded(arrival, departure) => {
            config.confidence_exact_code
        }
        location::LocationMatch::DifferentCountry => config.confidence_country_mismatch,
        location::LocationMatch::DifferentCity if location::both_coded(arrival, departure) => {
            config.confidence_country_mismatch
        }
        _ => config.confidence_city_heuristic,
    };

    let bonus = if idle >= chrono::Duration::hours(config.long_idle_hours) {
        config.confidence_idle_bonus
    } else {
        0.0
    };
    Confidence::new(base + bonus)
}
