//! The itinerary aggregate: segments, trip metadata, version counter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Segment;

/// The aggregate root. Owns its segments in display order (insertion
/// order until the Reorder Engine changes it, never time order), plus a
/// monotonic version counter used for optimistic concurrency at the
/// store boundary.
///
/// Loaded whole, mutated in memory, saved whole. The engines never bump
/// `version` themselves; the store does, on every successful save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: String,
    pub title: String,
    /// Incremented by the store on each persisted mutation.
    pub version: u64,
    /// Trip date bounds; default bounds for new segments, not constraints.
    pub window_start: Option<DateTime<Utc>>,
    pub window_end: Option<DateTime<Utc>>,
    pub segments: Vec<Segment>,
}

impl Itinerary {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            version: 0,
            window_start: None,
            window_end: None,
            segments: Vec::new(),
        }
    }

    pub fn segment(&self, id: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    pub fn segment_mut(&mut self, id: &str) -> Option<&mut Segment> {
        self.segments.iter_mut().find(|s| s.id == id)
    }

    /// Position of a segment in display order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.segments.iter().position(|s| s.id == id)
    }

    /// Append a segment at the end of the display order.
    pub fn insert_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Insert a segment at a specific display position (clamped to the
    /// current length).
    pub fn insert_segment_at(&mut self, index: usize, segment: Segment) {
        let index = index.min(self.segments.len());
        self.segments.insert(index, segment);
    }

    pub fn remove_segment(&mut self, id: &str) -> Option<Segment> {
        let index = self.position(id)?;
        Some(self.segments.remove(index))
    }

    pub fn segment_ids(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
