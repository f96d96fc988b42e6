//! The Temporal Index: a chronologically sorted view of an itinerary.
//!
//! Derived fresh from the aggregate for the duration of one operation and
//! then discarded. Dependency between segments is implicit in time
//! order, so there is no persisted structure to go stale.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use wayline_core::models::Itinerary;

/// One segment's place in the chronological order.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Position in the itinerary's segment vector, the stable tie-break
    /// for identical starts.
    pub seq: usize,
}

/// Segment ids ordered by `start` ascending, ties broken by insertion
/// order. Build is O(n log n); successor/predecessor lookups are O(1)
/// via an id → position map.
#[derive(Debug)]
pub struct TemporalIndex {
    entries: Vec<IndexEntry>,
    positions: HashMap<String, usize>,
}

impl TemporalIndex {
    pub fn build(itinerary: &Itinerary) -> Self {
        let mut entries: Vec<IndexEntry> = itinerary
            .segments
            .iter()
            .enumerate()
            .map(|(seq, s)| IndexEntry {
                id: s.id.clone(),
                start: s.start,
                end: s.end,
                seq,
            })
            .collect();
        entries.sort_by(|a, b| a.start.cmp(&b.start).then(a.seq.cmp(&b.seq)));

        let positions = entries
            .iter()
            .enumerate()
            .map(|(pos, e)| (e.id.clone(), pos))
            .collect();

        Self { entries, positions }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Chronological position of a segment, if present.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn entry(&self, id: &str) -> Option<&IndexEntry> {
        self.position(id).map(|pos| &self.entries[pos])
    }

    /// Segment ids in chronological order.
    pub fn ordered_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    /// The segment immediately after `id` in time order.
    pub fn successor(&self, id: &str) -> Option<&IndexEntry> {
        let pos = self.position(id)?;
        self.entries.get(pos + 1)
    }

    /// The segment immediately before `id` in time order.
    pub fn predecessor(&self, id: &str) -> Option<&IndexEntry> {
        let pos = self.position(id)?;
        pos.checked_sub(1).map(|p| &self.entries[p])
    }

    /// Chronologically adjacent pairs `(earlier, later)`.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (&IndexEntry, &IndexEntry)> {
        self.entries.windows(2).map(|w| (&w[0], &w[1]))
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use test_fixtures::{itinerary, transfer_at, ts};

    use super::*;

    #[test]
    fn orders_by_start_ascending() {
        let it = itinerary(
            "it-1",
            vec![
                transfer_at("s-late", "Paris", ts("2025-06-03T10:00:00Z"), Duration::hours(1)),
                transfer_at("s-early", "Paris", ts("2025-06-01T10:00:00Z"), Duration::hours(1)),
                transfer_at("s-mid", "Paris", ts("2025-06-02T10:00:00Z"), Duration::hours(1)),
            ],
        );
        let index = TemporalIndex::build(&it);
        let ids: Vec<&str> = index.ordered_ids().collect();
        assert_eq!(ids, vec!["s-early", "s-mid", "s-late"]);
    }

    #[test]
    fn identical_starts_keep_insertion_order() {
        let at = ts("2025-06-01T10:00:00Z");
        let it = itinerary(
            "it-1",
            vec![
                transfer_at("s-b", "Paris", at, Duration::hours(1)),
                transfer_at("s-a", "Paris", at, Duration::hours(2)),
            ],
        );
        let index = TemporalIndex::build(&it);
        let ids: Vec<&str> = index.ordered_ids().collect();
        assert_eq!(ids, vec!["s-b", "s-a"], "tie-break must be stable by insertion order");
    }

    #[test]
    fn successor_and_predecessor() {
        let it = itinerary(
            "it-1",
            vec![
                transfer_at("s-1", "Paris", ts("2025-06-01T10:00:00Z"), Duration::hours(1)),
                transfer_at("s-2", "Paris", ts("2025-06-02T10:00:00Z"), Duration::hours(1)),
            ],
        );
        let index = TemporalIndex::build(&it);
        assert_eq!(index.successor("s-1").map(|e| e.id.as_str()), Some("s-2"));
        assert_eq!(index.predecessor("s-2").map(|e| e.id.as_str()), Some("s-1"));
        assert!(index.successor("s-2").is_none());
        assert!(index.predecessor("s-1").is_none());
        assert!(index.successor("missing").is_none());
    }

    #[test]
    fn empty_itinerary_builds_empty_index() {
        let it = itinerary("it-1", vec![]);
        let index = TemporalIndex::build(&it);
        assert!(index.is_empty());
        assert_eq!(index.adjacent_pairs().count(), 0);
    }
}
