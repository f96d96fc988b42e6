/// Store adapter errors.
///
/// `VersionConflict` is the optimistic-concurrency signal: a save carried
/// a version that no longer matches the stored aggregate. Callers treat
/// it as retryable (reload, reapply, save again), never as permission to
/// overwrite.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("itinerary not found: {id}")]
    NotFound { id: String },

    #[error("version conflict on {id}: stored {expected}, save carried {found}")]
    VersionConflict { id: String, expected: u64, found: u64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
