mod cascade_mode;
mod confidence;
mod gap;
mod itinerary;
mod location;
mod segment;
mod segment_kind;

pub use cascade_mode::{CascadeMode, GapFillOutcome};
pub use confidence::Confidence;
pub use gap::{Gap, GapType, SuggestedSegmentType};
pub use itinerary::Itinerary;
pub use location::Location;
pub use segment::{Inference, Segment, SegmentSource, SegmentStatus};
pub use segment_kind::{
    ActivityDetails, CustomDetails, FlightDetails, HotelDetails, MeetingDetails, SegmentKind,
    TransferDetails, TransferMode,
};
