use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ApiError;
use crate::models::domain::{FlightSearch, HotelSearch};

pub const BAD_INPUT: &str = "Bad input";

/// Query string of `GET /flight`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FlightQueryParams {
    #[validate(required, length(min = 1))]
    pub destination: Option<String>,
    #[validate(required)]
    #[serde(rename = "departureDate")]
    pub departure_date: Option<String>,
    #[validate(required)]
    #[serde(rename = "returnDate")]
    pub return_date: Option<String>,
}

impl FlightQueryParams {
    /// Validate every parameter and produce a typed search.
    ///
    /// Any failure yields the same generic `Bad input` error.
    pub fn into_search(self) -> Result<FlightSearch, ApiError> {
        if let Err(errors) = self.validate() {
            tracing::debug!("Flight query validation failed: {}", errors);
            return Err(ApiError::BadRequest(BAD_INPUT.to_string()));
        }

        let departure_date = parse_iso_date(self.departure_date.as_deref());
        let return_date = parse_iso_date(self.return_date.as_deref());

        match (self.destination, departure_date, return_date) {
            (Some(destination), Some(departure_date), Some(return_date)) => Ok(FlightSearch {
                destination,
                departure_date,
                return_date,
            }),
            _ => Err(ApiError::BadRequest(BAD_INPUT.to_string())),
        }
    }
}

/// Query string of `GET /hotel`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct HotelQueryParams {
    #[validate(required, length(min = 1))]
    pub destination: Option<String>,
    #[validate(required)]
    #[serde(rename = "checkInDate")]
    pub check_in_date: Option<String>,
    #[validate(required)]
    #[serde(rename = "checkOutDate")]
    pub check_out_date: Option<String>,
}

impl HotelQueryParams {
    /// Validate every parameter and produce a typed search.
    ///
    /// Both dates are checked independently of each other.
    pub fn into_search(self) -> Result<HotelSearch, ApiError> {
        if let Err(errors) = self.validate() {
            tracing::debug!("Hotel query validation failed: {}", errors);
            return Err(ApiError::BadRequest(BAD_INPUT.to_string()));
        }

        let check_in_date = parse_iso_date(self.check_in_date.as_deref());
        let check_out_date = parse_iso_date(self.check_out_date.as_deref());

        match (self.destination, check_in_date, check_out_date) {
            (Some(destination), Some(check_in_date), Some(check_out_date)) => Ok(HotelSearch {
                destination,
                check_in_date,
                check_out_date,
            }),
            _ => Err(ApiError::BadRequest(BAD_INPUT.to_string())),
        }
    }
}

/// Parse a `YYYY-MM-DD` calendar date
///
/// Only the exact ten-character form is accepted: no padding, signs or
/// single-digit fields.
pub fn parse_iso_date(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?;
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return None;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight_params(destination: Option<&str>, departure: Option<&str>, ret: Option<&str>) -> FlightQueryParams {
        FlightQueryParams {
            destination: destination.map(String::from),
            departure_date: departure.map(String::from),
            return_date: ret.map(String::from),
        }
    }

    #[test]
    fn test_valid_flight_query() {
        let search = flight_params(Some("Tokyo"), Some("2024-06-01"), Some("2024-06-10"))
            .into_search()
            .unwrap();
        assert_eq!(search.destination, "Tokyo");
        assert_eq!(search.return_date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
    }

    #[test]
    fn test_empty_destination_rejected() {
        let result = flight_params(Some(""), Some("2024-06-01"), Some("2024-06-10")).into_search();
        assert!(matches!(result, Err(ApiError::BadRequest(msg)) if msg == BAD_INPUT));
    }

    #[test]
    fn test_malformed_return_date_rejected() {
        let result = flight_params(Some("Tokyo"), Some("2024-06-01"), Some("2023-13-40")).into_search();
        assert!(result.is_err());
    }

    #[test]
    fn test_hotel_check_in_validated_independently() {
        let params = HotelQueryParams {
            destination: Some("Paris".to_string()),
            check_in_date: Some("garbage".to_string()),
            check_out_date: Some("2024-06-05".to_string()),
        };
        assert!(params.into_search().is_err());
    }

    #[test]
    fn test_hotel_missing_check_out_rejected() {
        let params = HotelQueryParams {
            destination: Some("Paris".to_string()),
            check_in_date: Some("2024-06-01".to_string()),
            check_out_date: None,
        };
        assert!(params.into_search().is_err());
    }

    #[test]
    fn test_parse_iso_date() {
        assert!(parse_iso_date(Some("2024-02-30")).is_none());
        assert!(parse_iso_date(None).is_none());
        assert_eq!(parse_iso_date(Some("2024-02-29")), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_parse_iso_date_requires_exact_shape() {
        for input in ["2024-6-1", "+2024-06-01", " 2024-06-01 ", "2024-06-01 ", "2024/06/01", "20240601"] {
            assert!(parse_iso_date(Some(input)).is_none(), "accepted {:?}", input);
        }
    }
}
