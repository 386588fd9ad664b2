use actix_web::{web, HttpResponse};

use crate::core::{search_hotels, search_round_trips, FlightSearchError};
use crate::error::ApiError;
use crate::models::{FlightQueryParams, HotelQueryParams};
use crate::routes::AppState;

/// Configure flight and hotel search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/flight", web::get().to(cheapest_flights))
        .route("/hotel", web::get().to(cheapest_hotels));
}

/// Cheapest round trips endpoint
///
/// GET /flight?destination={city}&departureDate={YYYY-MM-DD}&returnDate={YYYY-MM-DD}
async fn cheapest_flights(
    state: web::Data<AppState>,
    query: web::Query<FlightQueryParams>,
) -> Result<HttpResponse, ApiError> {
    let search = query.into_inner().into_search().map_err(|e| {
        tracing::warn!("Rejected flight search: {}", e);
        e
    })?;

    tracing::info!(
        "Searching flights {} <-> {} ({} / {})",
        state.origin_city,
        search.destination,
        search.departure_date,
        search.return_date
    );

    match search_round_trips(state.store.as_ref(), &state.origin_city, &search).await {
        Ok(itineraries) => {
            tracing::info!("Returning {} itineraries for {}", itineraries.len(), search.destination);
            Ok(HttpResponse::Ok().json(itineraries))
        }
        Err(FlightSearchError::Outbound(e)) => {
            tracing::error!("Failed to fetch outbound flights for {}: {}", search.destination, e);
            Err(ApiError::Internal("Cannot get flights!".to_string()))
        }
        // Return-leg failures have always been answered with 400
        Err(e @ FlightSearchError::Return(_)) => {
            tracing::error!("Failed to fetch return flights for {}: {}", search.destination, e);
            Err(ApiError::BadRequest("Cannot get return flights!".to_string()))
        }
    }
}

/// Cheapest hotels endpoint
///
/// GET /hotel?destination={city}&checkInDate={YYYY-MM-DD}&checkOutDate={YYYY-MM-DD}
async fn cheapest_hotels(
    state: web::Data<AppState>,
    query: web::Query<HotelQueryParams>,
) -> Result<HttpResponse, ApiError> {
    let search = query.into_inner().into_search().map_err(|e| {
        tracing::warn!("Rejected hotel search: {}", e);
        e
    })?;

    tracing::info!(
        "Searching hotels in {} ({} to {})",
        search.destination,
        search.check_in_date,
        search.check_out_date
    );

    match search_hotels(state.store.as_ref(), &search).await {
        Ok(offers) => {
            tracing::info!("Returning {} hotels for {}", offers.len(), search.destination);
            Ok(HttpResponse::Ok().json(offers))
        }
        Err(e) => {
            tracing::error!("Failed to fetch hotels for {}: {}", search.destination, e);
            Err(ApiError::Internal("Cannot get hotels!".to_string()))
        }
    }
}
