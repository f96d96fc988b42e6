//! # wayline-continuity
//!
//! The space half of the Wayline core: walk the chronological segment
//! sequence for geographic/temporal discontinuities (Continuity
//! Validator) and synthesize candidate connective segments to close them
//! (Gap Inference Engine).

pub mod inference;
pub mod location;
pub mod validator;

pub use inference::{fill_gaps, infer_gap_filler};
pub use location::LocationMatch;
pub use validator::validate_continuity;
