use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A single flight leg as stored in the `flights` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRecord {
    #[serde(rename = "srccity")]
    pub source_city: String,
    #[serde(rename = "destcity")]
    pub destination_city: String,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    pub airline: String,
    pub price: i64,
}

/// A nightly room charge as stored in the `hotels` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelRecord {
    pub city: String,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    #[serde(rename = "hotelName")]
    pub hotel_name: String,
    pub price: i64,
}

/// Airline and price of one leg, used while sorting and pairing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredRecord {
    pub airline: String,
    pub price: i64,
}

impl From<FlightRecord> for FilteredRecord {
    fn from(record: FlightRecord) -> Self {
        Self {
            airline: record.airline,
            price: record.price,
        }
    }
}

/// Total price of all matching records for one hotel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelAggregate {
    pub hotel_name: String,
    pub total_price: i64,
}

/// Validated flight search parameters
#[derive(Debug, Clone)]
pub struct FlightSearch {
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
}

/// Validated hotel search parameters
#[derive(Debug, Clone)]
pub struct HotelSearch {
    pub destination: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

/// Parse the calendar date out of a stored `date` field.
///
/// Stored values are either plain `YYYY-MM-DD` dates or full ISO timestamps
/// such as `2024-06-01T00:00:00Z`; only the date part is significant.
pub fn parse_stored_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.get(..10)?;
    date_part.parse().ok()
}

fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_stored_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
}
