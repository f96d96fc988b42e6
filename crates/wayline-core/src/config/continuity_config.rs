//! Continuity subsystem configuration.

use serde::{Deserialize, Serialize};

/// Tunables for the Continuity Validator and the Gap Inference Engine.
///
/// Every field has a serde default so old config documents keep
/// deserializing after new fields land.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuityConfig {
    /// Idle time between continuous segments above which an
    /// informational IdleWindow gap is reported.
    pub idle_window_threshold_hours: i64,

    /// Minimum candidate confidence accepted by `fill_gaps`.
    pub fill_confidence_threshold: f64,

    // Classifier confidence weights
    /// Both endpoints carry codes and they differ (e.g. JFK vs CDG).
    pub confidence_exact_code: f64,
    /// Countries known and different, but no codes to compare.
    pub confidence_country_mismatch: f64,
    /// Only the city strings differ; country unknown or equal.
    pub confidence_city_heuristic: f64,
    /// Bonus when the idle window is long enough to plausibly hold the
    /// suggested connection.
    pub confidence_idle_bonus: f64,

    /// Idle window length that earns the bonus for a suggested flight.
    pub long_idle_hours: i64,
}

impl Default for ContinuityConfig {
    fn default() -> Self {
        Self {
            idle_window_threshold_hours: 48,
            fill_confidence_threshold: 0.6,
            confidence_exact_code: 0.8,
            confidence_country_mismatch: 0.6,
            confidence_city_heuristic: 0.45,
            confidence_idle_bonus: 0.1,
            long_idle_hours: 3,
        }
    }
}
