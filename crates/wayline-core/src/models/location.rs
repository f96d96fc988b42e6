//! Location endpoints: every segment departs from and arrives at one.

use serde::{Deserialize, Serialize};

/// A coarse location: an optional airport/venue code, a city string, and
/// an optional ISO country code. Matching is string-based and
/// case-insensitive. There is deliberately no geocoding here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Airport or venue code, e.g. "JFK". Compared exactly (case-insensitive).
    pub code: Option<String>,
    /// City or region name, e.g. "New York".
    pub city: String,
    /// ISO 3166 alpha-2 country code, e.g. "US". Unknown for many venues.
    pub country: Option<String>,
}

impl Location {
    /// An airport with a known IATA code and country.
    pub fn airport(
        code: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            code: Some(code.into()),
            city: city.into(),
            country: Some(country.into()),
        }
    }

    /// A venue known only by city and country.
    pub fn venue(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            code: None,
            city: city.into(),
            country: Some(country.into()),
        }
    }

    /// A location known only by its city string.
    pub fn city_only(city: impl Into<String>) -> Self {
        Self {
            code: None,
            city: city.into(),
            country: None,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.city, code),
            None => write!(f, "{}", self.city),
        }
    }
}
