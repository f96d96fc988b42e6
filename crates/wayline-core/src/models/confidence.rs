use serde::{Deserialize, Serialize};

/// A classification confidence in [0, 1], clamped at construction.
///
/// Deserialized values bypass the clamp; the untrusted-input boundary
/// re-checks bounds via `validation::validate_segment`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True when the raw value (however obtained) is a valid confidence.
    pub fn in_bounds(self) -> bool {
        (0.0..=1.0).contains(&self.0)
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
