use std::sync::Arc;

use tracing::debug;

use crate::core::client::search_client::{search, SearchBackend};
use crate::domain::query::model::datum_query::DatumQuery;
use crate::domain::query::model::datum_record::DatumRecord;
use crate::domain::query::model::query_mode::QueryMode;
use crate::domain::query::service::query_render_service::QueryRenderer;
use crate::errors::AppError;

/// Render → search → normalize for one datum query.
pub struct DatumQueryService {
    renderer: QueryRenderer,
    backend: Arc<dyn SearchBackend>,
}

impl DatumQueryService {
    pub fn new(renderer: QueryRenderer, backend: Arc<dyn SearchBackend>) -> Self {
        Self { renderer, backend }
    }

    pub async fn query(&self, query: &DatumQuery, mode: QueryMode) -> Result<Vec<DatumRecord>, AppError> {
        let body = self.renderer.render(query, mode).await?;
        let response = search(self.backend.as_ref(), body, mode).await?;
        let records = response.into_records();

        debug!(records = records.len(), "Normalized search response");
        Ok(records)
    }
}
