//! Cascade Mover behavior: idempotence, gap preservation, atomicity,
//! dependency-only scope.

use chrono::{DateTime, Duration, Utc};

use test_fixtures::{flight, hotel, itinerary, transfer_at, ts, with_travelers};
use wayline_core::errors::EngineError;
use wayline_core::models::{CascadeMode, Itinerary, Location};
use wayline_temporal::{move_segment, TemporalIndex};

fn london_trip() -> Itinerary {
    itinerary(
        "it-london",
        vec![
            flight(
                "f-out",
                Location::airport("JFK", "New York", "US"),
                Location::airport("LHR", "London", "GB"),
                ts("2025-06-01T10:00:00Z"),
                ts("2025-06-01T18:00:00Z"),
            ),
            hotel(
                "h-london",
                Location::venue("London", "GB"),
                ts("2025-06-01T20:00:00Z"),
                ts("2025-06-05T08:00:00Z"),
            ),
            flight(
                "f-back",
                Location::airport("LHR", "London", "GB"),
                Location::airport("JFK", "New York", "US"),
                ts("2025-06-05T09:00:00Z"),
                ts("2025-06-05T17:00:00Z"),
            ),
        ],
    )
}

#[test]
fn moving_to_current_start_is_a_noop() {
    let it = london_trip();
    let moved = move_segment(&it, "f-back", ts("2025-06-05T09:00:00Z"), CascadeMode::Auto).unwrap();
    assert_eq!(moved, it, "zero-delta move must return a structurally equal itinerary");
}

#[test]
fn missing_segment_is_not_found() {
    let it = london_trip();
    let err = move_segment(&it, "f-nope", ts("2025-06-05T09:00:00Z"), CascadeMode::Auto).unwrap_err();
    assert!(matches!(err, EngineError::SegmentNotFound { .. }), "got: {err}");
}

#[test]
fn target_keeps_its_duration() {
    let it = london_trip();
    let moved = move_segment(&it, "f-back", ts("2025-06-06T09:00:00Z"), CascadeMode::Auto).unwrap();
    let f = moved.segment("f-back").unwrap();
    assert_eq!(f.start, ts("2025-06-06T09:00:00Z"));
    assert_eq!(f.end, ts("2025-06-06T17:00:00Z"));
}

#[test]
fn auto_move_with_no_downstream_touches_only_the_target() {
    // Push the return flight out a day; the hotel sits entirely before
    // the flight and must not move.
    let it = london_trip();
    let moved = move_segment(&it, "f-back", ts("2025-06-06T09:00:00Z"), CascadeMode::Auto).unwrap();

    assert_eq!(moved.segment("f-out").unwrap().start, ts("2025-06-01T10:00:00Z"));
    assert_eq!(moved.segment("h-london").unwrap().end, ts("2025-06-05T08:00:00Z"));
    assert_eq!(moved.segment("f-back").unwrap().start, ts("2025-06-06T09:00:00Z"));
}

#[test]
fn auto_cascade_preserves_downstream_gaps() {
    // Outbound flight moves +6h; hotel and return flight are downstream
    // (start >= flight end) and must ride along with identical gaps.
    let it = london_trip();
    let before = gaps_to_predecessor(&it);

    let moved = move_segment(&it, "f-out", ts("2025-06-01T16:00:00Z"), CascadeMode::Auto).unwrap();
    let after = gaps_to_predecessor(&moved);

    assert_eq!(before, after, "every downstream gap to its predecessor must be unchanged");
    assert_eq!(moved.segment("h-london").unwrap().start, ts("2025-06-02T02:00:00Z"));
    assert_eq!(moved.segment("f-back").unwrap().start, ts("2025-06-05T15:00:00Z"));
}

#[test]
fn moving_backward_shifts_downstream_backward() {
    let it = london_trip();
    let moved = move_segment(&it, "f-out", ts("2025-06-01T04:00:00Z"), CascadeMode::Auto).unwrap();
    assert_eq!(moved.segment("h-london").unwrap().start, ts("2025-06-01T14:00:00Z"));
    assert_eq!(moved.segment("f-back").unwrap().start, ts("2025-06-05T03:00:00Z"));
}

#[test]
fn segments_overlapping_the_target_do_not_ride_along() {
    // A transfer that starts during the flight (start < flight end) is
    // not downstream and stays put in AUTO mode.
    let mut it = london_trip();
    it.insert_segment(transfer_at(
        "x-during",
        "New York",
        ts("2025-06-01T12:00:00Z"),
        Duration::hours(1),
    ));
    let moved = move_segment(&it, "f-out", ts("2025-06-01T16:00:00Z"), CascadeMode::Auto).unwrap();
    assert_eq!(moved.segment("x-during").unwrap().start, ts("2025-06-01T12:00:00Z"));
}

#[test]
fn identical_starts_shift_together_preserving_order() {
    let at = ts("2025-06-05T09:00:00Z");
    let mut it = london_trip();
    it.insert_segment(transfer_at("x-tied", "London", at, Duration::hours(1)));

    // Move the hotel; both the return flight and the tied transfer start
    // at/after hotel end, shift together, and keep their relative order.
    let moved = move_segment(&it, "h-london", ts("2025-06-01T22:00:00Z"), CascadeMode::Auto).unwrap();
    let index = TemporalIndex::build(&moved);
    let order: Vec<&str> = index.ordered_ids().collect();
    let f_pos = order.iter().position(|id| *id == "f-back").unwrap();
    let x_pos = order.iter().position(|id| *id == "x-tied").unwrap();
    assert!(f_pos < x_pos, "tied segments must keep insertion order, got {order:?}");
    assert_eq!(
        moved.segment("f-back").unwrap().start,
        moved.segment("x-tied").unwrap().start
    );
}

#[test]
fn overflow_aborts_atomically_with_affected_ids() {
    let it = london_trip();
    let far_future = DateTime::<Utc>::MAX_UTC - Duration::hours(1);
    let err = move_segment(&it, "f-out", far_future, CascadeMode::Auto).unwrap_err();

    match err {
        EngineError::AdjustmentFailed { affected, .. } => {
            assert!(affected.contains(&"f-out".to_string()));
            assert!(affected.contains(&"h-london".to_string()), "diagnostics must list the whole dependent set");
        }
        other => panic!("expected AdjustmentFailed, got {other}"),
    }
    // Input untouched; the mover works on a clone.
    assert_eq!(it.segment("h-london").unwrap().start, ts("2025-06-01T20:00:00Z"));
}

#[test]
fn dependencies_only_moves_next_segment_per_shared_traveler() {
    let it = itinerary(
        "it-dep",
        vec![
            with_travelers(
                flight(
                    "f-1",
                    Location::airport("JFK", "New York", "US"),
                    Location::airport("LHR", "London", "GB"),
                    ts("2025-06-01T10:00:00Z"),
                    ts("2025-06-01T18:00:00Z"),
                ),
                &["ava", "ben"],
            ),
            with_travelers(
                hotel(
                    "h-ava",
                    Location::venue("London", "GB"),
                    ts("2025-06-01T20:00:00Z"),
                    ts("2025-06-03T08:00:00Z"),
                ),
                &["ava"],
            ),
            with_travelers(
                transfer_at("x-none", "London", ts("2025-06-01T19:00:00Z"), Duration::hours(1)),
                &["cara"],
            ),
        ],
    );

    let moved = move_segment(&it, "f-1", ts("2025-06-01T13:00:00Z"), CascadeMode::DependenciesOnly)
        .unwrap();

    // ava's next segment rides along; cara's unrelated transfer does not,
    // even though it is now temporally inconsistent.
    assert_eq!(moved.segment("h-ava").unwrap().start, ts("2025-06-01T23:00:00Z"));
    assert_eq!(moved.segment("x-none").unwrap().start, ts("2025-06-01T19:00:00Z"));
}

#[test]
fn every_segment_satisfies_end_after_start_after_any_move() {
    let it = london_trip();
    let moved = move_segment(&it, "h-london", ts("2025-06-02T06:00:00Z"), CascadeMode::Auto).unwrap();
    for s in &moved.segments {
        assert!(s.end >= s.start, "segment {} violates end >= start", s.id);
    }
}

/// Gap in seconds from each adjacent pair's later segment to its
/// chronological predecessor, keyed by the later segment's id.
fn gaps_to_predecessor(it: &Itinerary) -> Vec<(String, i64)> {
    let index = TemporalIndex::build(it);
    index
        .adjacent_pairs()
        .map(|(a, b)| (b.id.clone(), (b.start - a.end).num_seconds()))
        .collect()
}

mod properties {
    use proptest::prelude::*;

    use super::*;

    fn random_itinerary(offsets: &[(u16, u16)]) -> Itinerary {
        let base = ts("2025-06-01T00:00:00Z");
        itinerary(
            "it-prop",
            offsets
                .iter()
                .enumerate()
                .map(|(i, (start_h, dur_h))| {
                    transfer_at(
                        &format!("s-{i}"),
                        "Paris",
                        base + Duration::hours(*start_h as i64),
                        Duration::hours(*dur_h as i64),
                    )
                })
                .collect(),
        )
    }

    proptest! {
        /// After an AUTO move, every segment that was downstream of the
        /// target keeps its exact gap to its chronological predecessor,
        /// and end >= start holds everywhere.
        #[test]
        fn auto_move_preserves_downstream_gaps(
            offsets in proptest::collection::vec((0u16..200, 0u16..48), 2..12),
            target in 0usize..12,
            delta_hours in -100i64..100,
        ) {
            let it = random_itinerary(&offsets);
            let target_id = format!("s-{}", target % offsets.len());
            let target_end = it.segment(&target_id).unwrap().end;

            let new_start = it.segment(&target_id).unwrap().start + Duration::hours(delta_hours);
            let moved = move_segment(&it, &target_id, new_start, CascadeMode::Auto).unwrap();

            // Downstream = originally starting at or after the target's end.
            let downstream: Vec<String> = it
                .segments
                .iter()
                .filter(|s| s.id != target_id && s.start >= target_end)
                .map(|s| s.id.clone())
                .collect();

            let shifted: std::collections::HashSet<String> = downstream
                .iter()
                .cloned()
                .chain([target_id.clone()])
                .collect();
            let before: std::collections::HashMap<String, i64> =
                gaps_to_predecessor(&it).into_iter().collect();
            let after: std::collections::HashMap<String, i64> =
                gaps_to_predecessor(&moved).into_iter().collect();
            let index_before = TemporalIndex::build(&it);
            let index_after = TemporalIndex::build(&moved);

            // A downstream segment whose chronological predecessor also
            // shifted (another downstream segment, or the target itself,
            // as long as the pair identity survived the move) must keep
            // its gap to the second.
            for id in &downstream {
                let pred_before = index_before.predecessor(id).map(|e| e.id.clone());
                let pred_after = index_after.predecessor(id).map(|e| e.id.clone());
                if pred_before == pred_after
                    && pred_before.as_deref().is_some_and(|p| shifted.contains(p))
                {
                    prop_assert_eq!(before.get(id), after.get(id), "gap changed for {}", id);
                }
            }
            for s in &moved.segments {
                prop_assert!(s.end >= s.start);
            }
        }
    }
}
