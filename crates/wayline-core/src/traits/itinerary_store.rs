//! The store adapter seam.

use crate::errors::EngineResult;
use crate::models::Itinerary;

/// Persistence boundary for itinerary aggregates.
///
/// Aggregates are loaded whole and saved whole; there is no sub-segment
/// persistence. `save` enforces optimistic concurrency: the caller passes
/// the aggregate carrying the version it read, the store compares it to
/// the stored version and rejects a mismatch with
/// `StoreError::VersionConflict`, a retryable conflict rather than a
/// silent merge. On success the store persists a copy with `version + 1` and
/// returns it.
///
/// Implementations need not serialize calls; the single-writer-per-
/// itinerary assumption lives with the caller, and the version check is
/// the last line of defense.
pub trait ItineraryStore: Send + Sync {
    fn load(&self, id: &str) -> EngineResult<Itinerary>;

    /// Persist and return the stored aggregate (version bumped).
    fn save(&self, itinerary: &Itinerary) -> EngineResult<Itinerary>;

    fn delete(&self, id: &str) -> EngineResult<()>;

    fn list_ids(&self) -> EngineResult<Vec<String>>;
}
