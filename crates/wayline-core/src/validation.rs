//! Invariant checks shared by the typed constructors, the untrusted-input
//! parse boundary, and the Cascade Mover's pre-commit re-validation.

use std::collections::HashSet;

use crate::errors::{EngineError, EngineResult};
use crate::models::{Itinerary, Segment, SegmentKind};

/// Validate a single segment's invariants.
///
/// - `end >= start` (zero-duration point events are fine)
/// - an inferred segment's confidence is in [0, 1]
pub fn validate_segment(segment: &Segment) -> EngineResult<()> {
    if segment.end < segment.start {
        let field = match segment.kind {
            SegmentKind::Hotel(_) => "check_out",
            _ => "end",
        };
        return Err(EngineError::validation(
            format!("segments.{}.{}", segment.id, field),
            format!(
                "end ({}) precedes start ({})",
                segment.end.to_rfc3339(),
                segment.start.to_rfc3339()
            ),
        ));
    }
    if let Some(inference) = &segment.inference {
        if !inference.confidence.in_bounds() {
            return Err(EngineError::validation(
                format!("segments.{}.inference.confidence", segment.id),
                format!("confidence {} outside [0, 1]", inference.confidence.value()),
            ));
        }
    }
    Ok(())
}

/// Validate the whole aggregate: every segment plus id uniqueness.
pub fn validate_itinerary(itinerary: &Itinerary) -> EngineResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(itinerary.len());
    for segment in &itinerary.segments {
        if !seen.insert(segment.id.as_str()) {
            return Err(EngineError::validation(
                format!("segments.{}.id", segment.id),
                "duplicate segment id",
            ));
        }
        validate_segment(segment)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use crate::models::Location;

    use super::*;

    #[test]
    fn duplicate_ids_are_rejected() {
        let now = Utc::now();
        let a = Segment::activity("walk", Location::city_only("Rome"), now, now + Duration::hours(1))
            .unwrap();
        let mut b = a.clone();
        b.start += Duration::hours(2);
        b.end += Duration::hours(2);

        let mut itinerary = Itinerary::new("it-1", "Rome");
        itinerary.insert_segment(a);
        itinerary.insert_segment(b);

        let err = validate_itinerary(&itinerary).unwrap_err();
        assert!(err.to_string().contains("duplicate"), "got: {err}");
    }
}
