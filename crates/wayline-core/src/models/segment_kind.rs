//! Typed segment variants: the closed set of things a trip is made of.

use serde::{Deserialize, Serialize};

use super::Location;

/// The segment's typed payload. Each variant carries only its relevant
/// fields; shared timing/status/traveler fields live on `Segment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SegmentKind {
    Flight(FlightDetails),
    Hotel(HotelDetails),
    Activity(ActivityDetails),
    Transfer(TransferDetails),
    Meeting(MeetingDetails),
    Custom(CustomDetails),
}

impl SegmentKind {
    /// Short lowercase label for logs and gap descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Flight(_) => "flight",
            Self::Hotel(_) => "hotel",
            Self::Activity(_) => "activity",
            Self::Transfer(_) => "transfer",
            Self::Meeting(_) => "meeting",
            Self::Custom(_) => "custom",
        }
    }
}

/// A flight leg. Departure is the origin airport, arrival the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightDetails {
    pub origin: Location,
    pub destination: Location,
    pub carrier: Option<String>,
    pub flight_number: Option<String>,
}

/// A hotel stay. The segment's start/end are check-in/check-out; the
/// property is both departure and arrival endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelDetails {
    pub property: Location,
}

/// A scheduled activity at a single venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub name: String,
    pub venue: Location,
}

/// A ground transfer between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferDetails {
    pub pickup: Location,
    pub dropoff: Location,
    pub mode: TransferMode,
}

/// How a transfer is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransferMode {
    Taxi,
    Train,
    Bus,
    RentalCar,
    Walk,
    #[default]
    Other,
}

/// A meeting at a venue; may be a zero-duration point event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingDetails {
    pub subject: String,
    pub venue: Location,
}

/// Anything the other variants don't cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomDetails {
    pub label: String,
    pub location: Location,
}
