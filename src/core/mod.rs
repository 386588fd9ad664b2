// Core search exports
pub mod filters;
pub mod flights;
pub mod hotels;

pub use filters::{Condition, Filter, flight_leg_filter, hotel_stay_filter};
pub use flights::{search_round_trips, sort_by_price, pair_legs, FlightSearchError};
pub use hotels::{search_hotels, aggregate_by_hotel};
