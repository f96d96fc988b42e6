//! # wayline-storage
//!
//! Reference `ItineraryStore` adapters. Aggregates are saved whole under
//! an optimistic version check: a save carrying a stale version is a
//! `VersionConflict`, never a silent merge.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use wayline_core::errors::StoreError;
use wayline_core::models::Itinerary;

/// Shared save protocol: compare the incoming version against the stored
/// one (0 expected for a first save), then hand back the copy to persist
/// with the version bumped.
fn versioned_copy(
    incoming: &Itinerary,
    stored_version: Option<u64>,
) -> Result<Itinerary, StoreError> {
    let expected = stored_version.unwrap_or(0);
    if incoming.version != expected {
        return Err(StoreError::VersionConflict {
            id: incoming.id.clone(),
            expected,
            found: incoming.version,
        });
    }
    let mut copy = incoming.clone();
    copy.version += 1;
    Ok(copy)
}
