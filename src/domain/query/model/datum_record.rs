use serde::Serialize;

/// Normalized time-series record returned to API consumers.
///
/// Field names on the wire are kept from the first release of the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatumRecord {
    #[serde(rename = "TimeStamp")]
    pub timestamp: String,
    #[serde(rename = "Value")]
    pub value: f64,
    #[serde(rename = "ValueString")]
    pub value_string: String,
    #[serde(rename = "TimeStampMeasured")]
    pub timestamp_measured: String,
}
