use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One round trip: the i-th cheapest outbound leg with the i-th cheapest return leg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    #[serde(rename = "City")]
    pub destination: String,
    #[serde(rename = "Departure Date")]
    pub departure_date: NaiveDate,
    #[serde(rename = "Departure Airline")]
    pub departure_airline: String,
    #[serde(rename = "Departure Price")]
    pub departure_price: i64,
    #[serde(rename = "Return Date")]
    pub return_date: NaiveDate,
    #[serde(rename = "Return Airline")]
    pub return_airline: String,
    #[serde(rename = "Return Price")]
    pub return_price: i64,
}

/// A hotel and its summed price over the requested stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelOffer {
    #[serde(rename = "City")]
    pub destination: String,
    #[serde(rename = "Check In Date")]
    pub check_in_date: NaiveDate,
    #[serde(rename = "Check Out Date")]
    pub check_out_date: NaiveDate,
    #[serde(rename = "Hotel")]
    pub hotel_name: String,
    #[serde(rename = "Price")]
    pub total_price: i64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
