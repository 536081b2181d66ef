use crate::core::persistence::template::query_template_fs_adapter::QueryTemplateFsAdapter;
use crate::domain::query::model::datum_query::DatumQuery;
use crate::domain::query::model::query_mode::QueryMode;
use crate::domain::query::model::query_template::QueryTemplate;
use crate::errors::AppError;

/// Turns a datum query into a backend request body.
#[derive(Debug, Clone)]
pub struct QueryRenderer {
    adapter: QueryTemplateFsAdapter,
}

impl QueryRenderer {
    pub fn new(adapter: QueryTemplateFsAdapter) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &QueryTemplateFsAdapter {
        &self.adapter
    }

    pub async fn render(&self, query: &DatumQuery, mode: QueryMode) -> Result<Vec<u8>, AppError> {
        let source = self.adapter.read(mode).await?;
        let template = QueryTemplate::parse(mode.template_file_name(), &source)?;
        Ok(template.render(query).into_bytes())
    }
}
