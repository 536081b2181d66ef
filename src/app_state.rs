use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::AppConfig;
use crate::core::client::search_client::OpenSearchClient;
use crate::core::persistence::template::query_template_fs_adapter::QueryTemplateFsAdapter;
use crate::domain::query::service::datum_query_service::DatumQueryService;
use crate::domain::query::service::query_render_service::QueryRenderer;

#[derive(Clone)]
pub struct AppState {
    pub query_service: Arc<DatumQueryService>,
}

pub fn build_app_state(config: &AppConfig) -> Result<AppState> {
    let backend = OpenSearchClient::new(config.backend_url.clone(), config.backend_timeout)?;
    let renderer = QueryRenderer::new(QueryTemplateFsAdapter::new(config.template_dir.clone()));

    info!(
        backend = backend.url(),
        templates = %renderer.adapter().dir().display(),
        "Search backend configured"
    );

    Ok(AppState {
        query_service: Arc::new(DatumQueryService::new(renderer, Arc::new(backend))),
    })
}
