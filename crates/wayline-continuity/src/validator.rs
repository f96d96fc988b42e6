//! The Continuity Validator: walk adjacent segment pairs and report
//! discontinuities. Pure: never mutates, never errors.

use chrono::Duration;
use tracing::debug;

use wayline_core::config::ContinuityConfig;
use wayline_core::models::{
    Gap, GapType, Itinerary, Segment, SegmentStatus, SuggestedSegmentType,
};
use wayline_temporal::TemporalIndex;

use crate::location::{self, LocationMatch};

/// Walk the itinerary's chronological segment sequence and classify every
/// discontinuity between adjacent pairs.
///
/// Cancelled segments are skipped: a cancelled flight neither closes nor
/// opens a gap. Zero- and one-segment itineraries yield an empty list.
/// Output follows the chronological order of each pair's earlier segment
/// (ties broken by segment id), so identical input always produces
/// identical output.
pub fn validate_continuity(itinerary: &Itinerary, config: &ContinuityConfig) -> Vec<Gap> {
    let index = TemporalIndex::build(itinerary);
    let active: Vec<&Segment> = index
        .ordered_ids()
        .filter_map(|id| itinerary.segment(id))
        .filter(|s| s.status != SegmentStatus::Cancelled)
        .collect();

    let mut gaps = Vec::new();
    for pair in active.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if let Some(gap) = classify_pair(a, b, config) {
            gaps.push(gap);
        }
    }

    // The index walk is already chronological; make ties deterministic.
    gaps.sort_by(|x, y| {
        let xs = itinerary.segment(&x.before_id).map(|s| s.start);
        let ys = itinerary.segment(&y.before_id).map(|s| s.start);
        xs.cmp(&ys).then_with(|| x.before_id.cmp(&y.before_id))
    });
    debug!(itinerary_id = %itinerary.id, gaps = gaps.len(), "validate_continuity");
    gaps
}

fn classify_pair(a: &Segment, b: &Segment, config: &ContinuityConfig) -> Option<Gap> {
    let idle = b.start - a.end;
    let idle_seconds = idle.num_seconds();

    if b.start < a.end {
        return Some(overlap_gap(a, b, idle_seconds));
    }

    let matched = location::compare(a.arrival_location(), b.departure_location());
    if matched.is_continuous() {
        if idle > Duration::hours(config.idle_window_threshold_hours) {
            return Some(Gap {
                before_id: a.id.clone(),
                after_id: b.id.clone(),
                gap_type: GapType::IdleWindow,
                suggested: SuggestedSegmentType::None,
                idle_seconds,
                description: format!(
                    "{} idle hours in {} between {} and {}",
                    idle.num_hours(),
                    a.arrival_location().city,
                    a.kind.label(),
                    b.kind.label()
                ),
            });
        }
        return None;
    }

    let suggested = match matched {
        LocationMatch::DifferentCountry => SuggestedSegmentType::Flight,
        _ => SuggestedSegmentType::Transfer,
    };
    Some(Gap {
        before_id: a.id.clone(),
        after_id: b.id.clone(),
        gap_type: GapType::LocationMismatch,
        suggested,
        idle_seconds,
        description: format!(
            "{} arrives at {} but {} departs from {}",
            a.kind.label(),
            a.arrival_location(),
            b.kind.label(),
            b.departure_location()
        ),
    })
}

/// Overlap is informational and does not imply a missing segment, but
/// two CONFIRMED bookings sharing a traveler are worth calling out
/// (unless one is a zero-duration meeting).
fn overlap_gap(a: &Segment, b: &Segment, idle_seconds: i64) -> Gap {
    let shared = a.shared_travelers(b);
    let both_confirmed =
        a.status == SegmentStatus::Confirmed && b.status == SegmentStatus::Confirmed;
    let excusable_point_event = a.is_point_event() || b.is_point_event();

    let description = if both_confirmed && !shared.is_empty() && !excusable_point_event {
        format!(
            "{} and {} overlap with shared travelers {}",
            a.kind.label(),
            b.kind.label(),
            shared.join(", ")
        )
    } else {
        format!("{} starts before {} ends", b.kind.label(), a.kind.label())
    };

    Gap {
        before_id: a.id.clone(),
        after_id: b.id.clone(),
        gap_type: GapType::TimeOverlap,
        suggested: SuggestedSegmentType::None,
        idle_seconds,
        description,
    }
}
