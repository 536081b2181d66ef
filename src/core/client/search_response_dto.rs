/* Search backend response DTOs (after bucket-key sanitization) */

use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull};

/// Decoded backend response, one variant per query mode.
#[derive(Debug)]
pub enum SearchResponse {
    Raw(RawHitResponse),
    Aggregated(AggregatedResponse),
}

// ---------- raw hits ----------

#[derive(Debug, Deserialize)]
pub struct RawHitResponse {
    pub hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct HitsEnvelope {
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub struct Hit {
    #[serde(rename = "_source", default)]
    pub source: HitSource,
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct HitSource {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub timestamp: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub value_float: f64,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub value_string: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "timestampmeasured", default)]
    pub timestamp_measured: String,
}

// ---------- aggregations ----------

#[derive(Debug, Deserialize)]
pub struct AggregatedResponse {
    pub aggregations: Aggregations,
}

/// Two date histograms over different timestamp fields. They share no key;
/// buckets line up by index only.
#[derive(Debug, Deserialize)]
pub struct Aggregations {
    #[serde(rename = "date(timestamp15m)")]
    pub timestamp: BucketAggregation<ValueBucket>,

    #[serde(rename = "date(timestampmeasured15m)")]
    pub timestamp_measured: BucketAggregation<MeasuredBucket>,
}

#[derive(Debug, Deserialize)]
pub struct BucketAggregation<B> {
    pub buckets: Vec<B>,
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ValueBucket {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub key_as_string: String,

    #[serde(default)]
    pub key: f64,

    #[serde(default)]
    pub doc_count: u64,

    #[serde(rename = "avg(value_float)", default)]
    pub average: AverageValue,
}

/// Empty buckets report `"value": null`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct AverageValue {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub value: f64,
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct MeasuredBucket {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub key_as_string: String,
}
