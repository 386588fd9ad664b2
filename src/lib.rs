//! Farefinder - cheapest flight and hotel lookup service
//!
//! Answers two queries over a document store: the cheapest round trips from a
//! fixed origin city to a destination, and the cheapest hotel stays in a city
//! over a date range.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{search_hotels, search_round_trips, Filter};
pub use error::ApiError;
pub use models::{FlightSearch, HotelSearch, Itinerary, HotelOffer};
pub use routes::AppState;
pub use services::{DocumentStore, MemoryStore, PostgresStore, StoreError};
