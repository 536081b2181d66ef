use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{debug, warn};

use crate::core::client::search_response_dto::{AggregatedResponse, RawHitResponse, SearchResponse};
use crate::domain::query::model::query_mode::QueryMode;
use crate::errors::AppError;

/// Transport to the document search backend: one request body in, the full
/// response body out.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn send(&self, body: Vec<u8>) -> Result<Vec<u8>, AppError>;
}

/// reqwest-backed [`SearchBackend`] posting to a fixed `_search` URL.
pub struct OpenSearchClient {
    client: Client,
    url: String,
}

impl OpenSearchClient {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SearchBackend for OpenSearchClient {
    async fn send(&self, body: Vec<u8>) -> Result<Vec<u8>, AppError> {
        let resp = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::Search(format!("request to {} failed: {}", self.url, e)))?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| AppError::Search(format!("reading response from {} failed: {}", self.url, e)))?;

        if !status.is_success() {
            warn!(%status, url = %self.url, "Search backend returned an error status");
            return Err(AppError::Search(format!(
                "{} returned {}: {}",
                self.url,
                status,
                String::from_utf8_lossy(&bytes)
            )));
        }

        debug!(bytes = bytes.len(), "Search backend responded");
        Ok(bytes.to_vec())
    }
}

/// Sends a rendered query and decodes the response into the shape `mode` expects.
pub async fn search(
    backend: &dyn SearchBackend,
    body: Vec<u8>,
    mode: QueryMode,
) -> Result<SearchResponse, AppError> {
    let raw = backend.send(body).await?;
    decode_search_response(&raw, mode)
}

/// Aggregation names come back as `date(timestamp,15m)`; the comma is
/// stripped before decoding so the keys match the DTO field names.
pub fn sanitize_bucket_keys(body: &str) -> String {
    body.replace(",15m", "15m")
}

pub fn decode_search_response(raw: &[u8], mode: QueryMode) -> Result<SearchResponse, AppError> {
    let text = String::from_utf8_lossy(raw);
    let sanitized = sanitize_bucket_keys(&text);

    let decoded = match mode {
        QueryMode::Raw => serde_json::from_str::<RawHitResponse>(&sanitized).map(SearchResponse::Raw),
        QueryMode::Aggregated => {
            serde_json::from_str::<AggregatedResponse>(&sanitized).map(SearchResponse::Aggregated)
        }
    };

    decoded.map_err(|e| AppError::Decode(e.to_string()))
}
