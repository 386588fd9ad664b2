use std::collections::BTreeMap;

use crate::core::filters::hotel_stay_filter;
use crate::models::{HotelAggregate, HotelOffer, HotelRecord, HotelSearch};
use crate::services::store::{find_records, Collection, DocumentStore, StoreError};

/// Find hotels in the searched city, cheapest total stay first
pub async fn search_hotels(
    store: &dyn DocumentStore,
    search: &HotelSearch,
) -> Result<Vec<HotelOffer>, StoreError> {
    let filter = hotel_stay_filter(&search.destination, search.check_in_date, search.check_out_date);
    let records: Vec<HotelRecord> = find_records(store, Collection::Hotels, &filter).await?;

    let aggregates = aggregate_by_hotel(records)?;
    tracing::debug!("Aggregated {} hotels in {}", aggregates.len(), search.destination);

    Ok(aggregates
        .into_iter()
        .map(|aggregate| HotelOffer {
            destination: search.destination.clone(),
            check_in_date: search.check_in_date,
            check_out_date: search.check_out_date,
            hotel_name: aggregate.hotel_name,
            total_price: aggregate.total_price,
        })
        .collect())
}

/// Group records by hotel name, sum prices per group and sort ascending by total.
///
/// Equal totals are ordered by hotel name. A total that does not fit in an
/// `i64` is an aggregation error.
pub fn aggregate_by_hotel(records: Vec<HotelRecord>) -> Result<Vec<HotelAggregate>, StoreError> {
    let mut totals: BTreeMap<String, i64> = BTreeMap::new();
    for record in records {
        let total = totals.entry(record.hotel_name).or_insert(0);
        *total = total
            .checked_add(record.price)
            .ok_or_else(|| StoreError::Aggregation("hotel price total overflow".to_string()))?;
    }

    let mut aggregates: Vec<HotelAggregate> = totals
        .into_iter()
        .map(|(hotel_name, total_price)| HotelAggregate {
            hotel_name,
            total_price,
        })
        .collect();

    aggregates.sort_by_key(|aggregate| aggregate.total_price);
    Ok(aggregates)
}
