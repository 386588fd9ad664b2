// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FlightRecord, HotelRecord, FilteredRecord, HotelAggregate, FlightSearch, HotelSearch};
pub use requests::{FlightQueryParams, HotelQueryParams};
pub use responses::{Itinerary, HotelOffer, HealthResponse, ErrorResponse};
