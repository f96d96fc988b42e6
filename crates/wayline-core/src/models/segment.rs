//! The segment: one scheduled, time-boxed item of a trip.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::EngineResult;

use super::segment_kind::{
    ActivityDetails, CustomDetails, FlightDetails, HotelDetails, MeetingDetails, SegmentKind,
    TransferDetails, TransferMode,
};
use super::{Confidence, Location};

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStatus {
    #[default]
    Tentative,
    Confirmed,
    Waitlisted,
    Cancelled,
    Completed,
}

/// Where a segment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SegmentSource {
    Import,
    Agent,
    #[default]
    Manual,
}

/// Provenance for a synthesized segment: why it was inferred and how
/// certain the classification was. Present only on inferred segments;
/// everything else carries no confidence at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inference {
    pub reason: String,
    pub confidence: Confidence,
}

/// One scheduled item of a trip.
///
/// Instants are UTC; `end >= start` always, with `end == start` allowed
/// for point events (e.g. a check-in call). Travelers are non-owning
/// references by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,
    pub kind: SegmentKind,
    pub status: SegmentStatus,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub travelers: Vec<String>,
    pub source: SegmentSource,
    pub inference: Option<Inference>,
}

impl Segment {
    /// Generate a fresh segment id.
    pub fn new_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Build a segment from parts, enforcing `end >= start`.
    pub fn new(
        kind: SegmentKind,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> EngineResult<Self> {
        let segment = Self {
            id: Self::new_id(),
            kind,
            status: SegmentStatus::default(),
            start,
            end,
            travelers: Vec::new(),
            source: SegmentSource::default(),
            inference: None,
        };
        crate::validation::validate_segment(&segment)?;
        Ok(segment)
    }

    pub fn flight(
        origin: Location,
        destination: Location,
        departs: DateTime<Utc>,
        arrives: DateTime<Utc>,
    ) -> EngineResult<Self> {
        Self::new(
            SegmentKind::Flight(FlightDetails {
                origin,
                destination,
                carrier: None,
                flight_number: None,
            }),
            departs,
            arrives,
        )
    }

    pub fn hotel(
        property: Location,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
    ) -> EngineResult<Self> {
        Self::new(SegmentKind::Hotel(HotelDetails { property }), check_in, check_out)
    }

    pub fn activity(
        name: impl Into<String>,
        venue: Location,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> EngineResult<Self> {
        Self::new(
            SegmentKind::Activity(ActivityDetails {
                name: name.into(),
                venue,
            }),
            start,
            end,
        )
    }

    pub fn transfer(
        pickup: Location,
        dropoff: Location,
        mode: TransferMode,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> EngineResult<Self> {
        Self::new(
            SegmentKind::Transfer(TransferDetails {
                pickup,
                dropoff,
                mode,
            }),
            start,
            end,
        )
    }

    pub fn meeting(
        subject: impl Into<String>,
        venue: Location,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> EngineResult<Self> {
        Self::new(
            SegmentKind::Meeting(MeetingDetails {
                subject: subject.into(),
                venue,
            }),
            start,
            end,
        )
    }

    pub fn custom(
        label: impl Into<String>,
        location: Location,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> EngineResult<Self> {
        Self::new(
            SegmentKind::Custom(CustomDetails {
                label: label.into(),
                location,
            }),
            start,
            end,
        )
    }

    /// Parse untrusted input (import pipeline, agent tool calls) into a
    /// segment. Deserializes, then re-checks every invariant the typed
    /// constructors enforce.
    pub fn from_json(value: &serde_json::Value) -> EngineResult<Self> {
        let segment: Segment = serde_json::from_value(value.clone())?;
        crate::validation::validate_segment(&segment)?;
        Ok(segment)
    }

    /// Where this segment starts from.
    pub fn departure_location(&self) -> &Location {
        match &self.kind {
            SegmentKind::Flight(f) => &f.origin,
            SegmentKind::Hotel(h) => &h.property,
            SegmentKind::Activity(a) => &a.venue,
            SegmentKind::Transfer(t) => &t.pickup,
            SegmentKind::Meeting(m) => &m.venue,
            SegmentKind::Custom(c) => &c.location,
        }
    }

    /// Where this segment ends up.
    pub fn arrival_location(&self) -> &Location {
        match &self.kind {
            SegmentKind::Flight(f) => &f.destination,
            SegmentKind::Hotel(h) => &h.property,
            SegmentKind::Activity(a) => &a.venue,
            SegmentKind::Transfer(t) => &t.dropoff,
            SegmentKind::Meeting(m) => &m.venue,
            SegmentKind::Custom(c) => &c.location,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn is_point_event(&self) -> bool {
        self.start == self.end
    }

    pub fn is_inferred(&self) -> bool {
        self.inference.is_some()
    }

    /// Ids of travelers present on both segments.
    pub fn shared_travelers(&self, other: &Segment) -> Vec<String> {
        self.travelers
            .iter()
            .filter(|t| other.travelers.contains(t))
            .cloned()
            .collect()
    }
}
