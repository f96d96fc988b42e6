//! Shared fixture builders for Wayline tests.
//!
//! Builders return fully valid segments with deterministic ids and
//! CONFIRMED status; tests override fields as needed.

use chrono::{DateTime, Duration, Utc};

use wayline_core::models::{
    Itinerary, Location, Segment, SegmentStatus, TransferMode,
};

/// Parse an RFC 3339 instant; panics on bad input (test data is literal).
pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .unwrap_or_else(|e| panic!("bad fixture timestamp {s}: {e}"))
        .with_timezone(&Utc)
}

pub fn itinerary(id: &str, segments: Vec<Segment>) -> Itinerary {
    let mut it = Itinerary::new(id, format!("trip {id}"));
    for segment in segments {
        it.insert_segment(segment);
    }
    it
}

fn confirmed(mut segment: Segment, id: &str) -> Segment {
    segment.id = id.to_string();
    segment.status = SegmentStatus::Confirmed;
    segment
}

pub fn flight(
    id: &str,
    from: Location,
    to: Location,
    departs: DateTime<Utc>,
    arrives: DateTime<Utc>,
) -> Segment {
    confirmed(
        Segment::flight(from, to, departs, arrives).expect("valid fixture flight"),
        id,
    )
}

pub fn hotel(
    id: &str,
    property: Location,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
) -> Segment {
    confirmed(
        Segment::hotel(property, check_in, check_out).expect("valid fixture hotel"),
        id,
    )
}

pub fn activity(
    id: &str,
    name: &str,
    venue: Location,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Segment {
    confirmed(
        Segment::activity(name, venue, start, end).expect("valid fixture activity"),
        id,
    )
}

/// A same-city taxi transfer of the given duration.
pub fn transfer_at(id: &str, city: &str, start: DateTime<Utc>, duration: Duration) -> Segment {
    confirmed(
        Segment::transfer(
            Location::city_only(city),
            Location::city_only(city),
            TransferMode::Taxi,
            start,
            start + duration,
        )
        .expect("valid fixture transfer"),
        id,
    )
}

/// A zero-duration meeting (point event).
pub fn meeting_at(id: &str, subject: &str, city: &str, at: DateTime<Utc>) -> Segment {
    confirmed(
        Segment::meeting(subject, Location::city_only(city), at, at).expect("valid fixture meeting"),
        id,
    )
}

pub fn with_travelers(mut segment: Segment, travelers: &[&str]) -> Segment {
    segment.travelers = travelers.iter().map(|t| t.to_string()).collect();
    segment
}

/// Opt-in tracing output for tests (`RUST_LOG=debug cargo test`).
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
