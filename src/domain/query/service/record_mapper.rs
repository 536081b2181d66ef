/* Maps decoded search responses → normalized datum records */

use crate::core::client::search_response_dto::{AggregatedResponse, RawHitResponse, SearchResponse};
use crate::domain::query::model::datum_record::DatumRecord;

impl SearchResponse {
    pub fn into_records(self) -> Vec<DatumRecord> {
        match self {
            SearchResponse::Raw(raw) => map_hits_to_records(raw),
            SearchResponse::Aggregated(agg) => map_buckets_to_records(agg),
        }
    }
}

/// One record per hit, in backend order.
pub fn map_hits_to_records(response: RawHitResponse) -> Vec<DatumRecord> {
    response
        .hits
        .hits
        .into_iter()
        .map(|hit| DatumRecord {
            timestamp: hit.source.timestamp,
            value: hit.source.value_float,
            value_string: hit.source.value_string,
            timestamp_measured: hit.source.timestamp_measured,
        })
        .collect()
}

/// One record per value bucket, zipped by index with the measured buckets.
///
/// A value bucket without a measured counterpart gets an empty
/// `timestamp_measured`. Measured buckets past the end of the value buckets
/// are never visited.
pub fn map_buckets_to_records(response: AggregatedResponse) -> Vec<DatumRecord> {
    let aggs = response.aggregations;
    let mut measured = aggs.timestamp_measured.buckets.into_iter();

    aggs.timestamp
        .buckets
        .into_iter()
        .map(|bucket| DatumRecord {
            timestamp: bucket.key_as_string,
            value: bucket.average.value,
            value_string: String::new(),
            timestamp_measured: measured
                .next()
                .map(|m| m.key_as_string)
                .unwrap_or_default(),
        })
        .collect()
}
