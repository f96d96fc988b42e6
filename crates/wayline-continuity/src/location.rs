//! The location-equality heuristic.
//!
//! String comparison only: codes first, then city names and country codes.
//! A known precision limitation: there is no geocoding and no distance
//! math here, and callers must not assume any.

use wayline_core::models::Location;

/// How two locations relate, coarsest signal last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationMatch {
    /// Codes present on both sides and equal (case-insensitive).
    ExactCode,
    /// Same city/region string (case-insensitive); continuous.
    SameCity,
    /// Different cities; countries equal or unknown on either side.
    DifferentCity,
    /// Countries known on both sides and different.
    DifferentCountry,
}

impl LocationMatch {
    /// Continuous pairs need no connective segment.
    pub fn is_continuous(self) -> bool {
        matches!(self, Self::ExactCode | Self::SameCity)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Compare an arrival location against the next departure location.
pub fn compare(arrival: &Location, departure: &Location) -> LocationMatch {
    if let (Some(a), Some(b)) = (&arrival.code, &departure.code) {
        if eq_ignore_case(a, b) {
            return LocationMatch::ExactCode;
        }
    }
    if eq_ignore_case(&arrival.city, &departure.city) {
        return LocationMatch::SameCity;
    }
    if let (Some(a), Some(b)) = (&arrival.country, &departure.country) {
        if !eq_ignore_case(a, b) {
            return LocationMatch::DifferentCountry;
        }
    }
    LocationMatch::DifferentCity
}

/// Both sides carry a code (the comparison that earns the highest
/// classification confidence).
pub fn both_coded(arrival: &Location, departure: &Location) -> bool {
    arrival.code.is_some() && departure.code.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_codes_match_exactly_case_insensitive() {
        let a = Location::airport("cdg", "Paris", "FR");
        let b = Location::airport("CDG", "Roissy", "FR");
        assert_eq!(compare(&a, &b), LocationMatch::ExactCode);
    }

    #[test]
    fn same_city_without_codes_is_continuous() {
        let a = Location::city_only("  London ");
        let b = Location::venue("london", "GB");
        assert_eq!(compare(&a, &b), LocationMatch::SameCity);
        assert!(compare(&a, &b).is_continuous());
    }

    #[test]
    fn different_countries_dominate() {
        let a = Location::airport("JFK", "New York", "US");
        let b = Location::airport("CDG", "Paris", "FR");
        assert_eq!(compare(&a, &b), LocationMatch::DifferentCountry);
    }

    #[test]
    fn different_city_unknown_country_stays_coarse() {
        let a = Location::city_only("Florence");
        let b = Location::city_only("Siena");
        assert_eq!(compare(&a, &b), LocationMatch::DifferentCity);
    }

    #[test]
    fn differing_codes_fall_through_to_city_compare() {
        // Two codes for the same city (e.g. a rail station and an
        // airport) must not read as a mismatch.
        let a = Location {
            code: Some("GDN".into()),
            city: "Paris".into(),
            country: Some("FR".into()),
        };
        let b = Location::airport("CDG", "Paris", "FR");
        assert_eq!(compare(&a, &b), LocationMatch::SameCity);
    }
}
