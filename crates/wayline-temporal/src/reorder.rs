//! The Reorder Engine: user-chosen display order over the segment set.

use std::collections::HashSet;

use tracing::debug;

use wayline_core::errors::{EngineError, EngineResult};
use wayline_core::models::Itinerary;

/// Apply an explicit display order.
///
/// `ordered_ids` must be a bijection over the current segment set:
/// same length, no duplicates, no unknown ids. Temporal order is NOT
/// enforced: display order is allowed to diverge (grouping same-day
/// items by preference), and no `start`/`end` field is touched.
pub fn reorder_segments(itinerary: &Itinerary, ordered_ids: &[String]) -> EngineResult<Itinerary> {
    if ordered_ids.len() != itinerary.len() {
        return Err(EngineError::validation(
            "ordered_ids",
            format!(
                "expected {} ids, got {}",
                itinerary.len(),
                ordered_ids.len()
            ),
        ));
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(ordered_ids.len());
    for id in ordered_ids {
        if !seen.insert(id.as_str()) {
            return Err(EngineError::validation(
                "ordered_ids",
                format!("duplicate id {id}"),
            ));
        }
        if itinerary.segment(id).is_none() {
            return Err(EngineError::validation(
                "ordered_ids",
                format!("unknown segment id {id}"),
            ));
        }
    }

    let mut reordered = itinerary.clone();
    reordered
        .segments
        .sort_by_key(|s| ordered_ids.iter().position(|id| *id == s.id));
    debug!(itinerary_id = %itinerary.id, "reorder_segments: applied display order");
    Ok(reordered)
}
