pub mod itinerary;
pub mod response;

pub use itinerary::{Activity, Advisory, DayItinerary, ItineraryResponse};
pub use response::{itinerary_from_value, parse_itinerary_json};
