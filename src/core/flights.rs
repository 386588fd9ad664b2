use thiserror::Error;

use crate::core::filters::flight_leg_filter;
use crate::models::{FilteredRecord, FlightRecord, FlightSearch, Itinerary};
use crate::services::store::{find_records, Collection, DocumentStore, StoreError};

/// Failure while fetching one leg of a round trip
#[derive(Debug, Error)]
pub enum FlightSearchError {
    #[error("Failed to fetch outbound flights: {0}")]
    Outbound(#[source] StoreError),

    #[error("Failed to fetch return flights: {0}")]
    Return(#[source] StoreError),
}

/// Find the cheapest round trips between `origin` and the searched destination.
///
/// Both legs are fetched and sorted by price independently, then paired by
/// rank: the i-th cheapest outbound with the i-th cheapest return. The result
/// holds `min(outbound, return)` itineraries.
pub async fn search_round_trips(
    store: &dyn DocumentStore,
    origin: &str,
    search: &FlightSearch,
) -> Result<Vec<Itinerary>, FlightSearchError> {
    let outbound_filter = flight_leg_filter(origin, &search.destination, search.departure_date);
    let outbound: Vec<FlightRecord> = find_records(store, Collection::Flights, &outbound_filter)
        .await
        .map_err(FlightSearchError::Outbound)?;
    let outbound = sort_by_price(outbound);

    let return_filter = flight_leg_filter(&search.destination, origin, search.return_date);
    let inbound: Vec<FlightRecord> = find_records(store, Collection::Flights, &return_filter)
        .await
        .map_err(FlightSearchError::Return)?;
    let inbound = sort_by_price(inbound);

    tracing::debug!(
        "Pairing {} outbound with {} return flights for {}",
        outbound.len(),
        inbound.len(),
        search.destination
    );

    Ok(pair_legs(search, outbound, inbound))
}

/// Project flights to airline/price and sort ascending by price.
///
/// The sort is stable, so equally priced flights keep store order.
pub fn sort_by_price(flights: Vec<FlightRecord>) -> Vec<FilteredRecord> {
    let mut legs: Vec<FilteredRecord> = flights.into_iter().map(FilteredRecord::from).collect();
    legs.sort_by_key(|leg| leg.price);
    legs
}

/// Zip two price-sorted legs positionally into itineraries
pub fn pair_legs(
    search: &FlightSearch,
    outbound: Vec<FilteredRecord>,
    inbound: Vec<FilteredRecord>,
) -> Vec<Itinerary> {
    outbound
        .into_iter()
        .zip(inbound)
        .map(|(departure, ret)| Itinerary {
            destination: search.destination.clone(),
            departure_date: search.departure_date,
            departure_airline: departure.airline,
            departure_price: departure.price,
            return_date: search.return_date,
            return_airline: ret.airline,
            return_price: ret.price,
        })
        .collect()
}
