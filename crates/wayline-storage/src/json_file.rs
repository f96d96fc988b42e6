//! File-backed store: one pretty-printed JSON document per itinerary.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use wayline_core::errors::{EngineResult, StoreError};
use wayline_core::models::Itinerary;
use wayline_core::traits::ItineraryStore;

/// Stores each aggregate as `<root>/<id>.json`. The version check reads
/// the current document before writing, so a stale save loses cleanly
/// with `VersionConflict` instead of clobbering a newer document.
#[derive(Debug)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> EngineResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(StoreError::from)?;
        Ok(Self { root })
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    fn read_document(&self, path: &Path) -> EngineResult<Option<Itinerary>> {
        match fs::read_to_string(path) {
            Ok(raw) => {
                let itinerary = serde_json::from_str(&raw).map_err(StoreError::from)?;
                Ok(Some(itinerary))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::from(e).into()),
        }
    }
}

impl ItineraryStore for JsonFileStore {
    fn load(&self, id: &str) -> EngineResult<Itinerary> {
        self.read_document(&self.path_for(id))?
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() }.into())
    }

    fn save(&self, itinerary: &Itinerary) -> EngineResult<Itinerary> {
        let path = self.path_for(&itinerary.id);
        let stored_version = self.read_document(&path)?.map(|it| it.version);
        let copy = crate::versioned_copy(itinerary, stored_version)?;

        let raw = serde_json::to_string_pretty(&copy).map_err(StoreError::from)?;
        fs::write(&path, raw).map_err(StoreError::from)?;
        debug!(id = %itinerary.id, version = copy.version, path = %path.display(), "json store: saved");
        Ok(copy)
    }

    fn delete(&self, id: &str) -> EngineResult<()> {
        let path = self.path_for(id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound { id: id.to_string() }.into())
            }
            Err(e) => Err(StoreError::from(e).into()),
        }
    }

    fn list_ids(&self) -> EngineResult<Vec<String>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(StoreError::from)? {
            let entry = entry.map_err(StoreError::from)?;
            let name = entry.file_name();
            if let Some(id) = name.to_string_lossy().strip_suffix(".json") {
                ids.push(id.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}
