mod itinerary_store;

pub use itinerary_store::ItineraryStore;
