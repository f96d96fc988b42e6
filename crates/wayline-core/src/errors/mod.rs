mod engine_error;
mod store_error;

pub use engine_error::{EngineError, EngineResult};
pub use store_error::StoreError;
