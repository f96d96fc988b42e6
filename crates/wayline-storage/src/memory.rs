//! In-memory store: a versioned map, for tests and embedded use.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use wayline_core::errors::{EngineError, EngineResult, StoreError};
use wayline_core::models::Itinerary;
use wayline_core::traits::ItineraryStore;

/// A `HashMap` behind an `RwLock`. The lock serializes individual loads
/// and saves; read-modify-write races across calls are what the version
/// check exists to catch.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, Itinerary>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItineraryStore for MemoryStore {
    fn load(&self, id: &str) -> EngineResult<Itinerary> {
        let items = self
            .items
            .read()
            .map_err(|e| EngineError::Internal(format!("store lock poisoned: {e}")))?;
        items
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() }.into())
    }

    fn save(&self, itinerary: &Itinerary) -> EngineResult<Itinerary> {
        let mut items = self
            .items
            .write()
            .map_err(|e| EngineError::Internal(format!("store lock poisoned: {e}")))?;
        let stored_version = items.get(&itinerary.id).map(|it| it.version);
        let copy = crate::versioned_copy(itinerary, stored_version)?;
        debug!(id = %itinerary.id, version = copy.version, "memory store: saved");
        items.insert(copy.id.clone(), copy.clone());
        Ok(copy)
    }

    fn delete(&self, id: &str) -> EngineResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| EngineError::Internal(format!("store lock poisoned: {e}")))?;
        items
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() }.into())
    }

    fn list_ids(&self) -> EngineResult<Vec<String>> {
        let items = self
            .items
            .read()
            .map_err(|e| EngineError::Internal(format!("store lock poisoned: {e}")))?;
        let mut ids: Vec<String> = items.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
