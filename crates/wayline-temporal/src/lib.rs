//! # wayline-temporal
//!
//! The time half of the Wayline core: a chronologically sorted view of an
//! itinerary's segments (Temporal Index), time moves that cascade to
//! dependent segments all-or-nothing (Cascade Mover), and display-order
//! permutation (Reorder Engine).

pub mod cascade;
pub mod index;
pub mod reorder;

pub use cascade::move_segment;
pub use index::TemporalIndex;
pub use reorder::reorder_segments;
