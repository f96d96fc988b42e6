use super::StoreError;

/// Top-level error type for the Wayline itinerary engine.
/// All subsystem errors convert into this via `From` impls.
///
/// Expected domain conditions (missing segment, invariant violation,
/// stale version) are variants here, never panics.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("segment not found: {id}")]
    SegmentNotFound { id: String },

    #[error("validation failed on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("adjustment failed ({message}); affected segments: {affected:?}")]
    AdjustmentFailed {
        affected: Vec<String>,
        message: String,
    },

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Shorthand for a validation failure on a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Convenience type alias.
pub type EngineResult<T> = Result<T, EngineError>;
