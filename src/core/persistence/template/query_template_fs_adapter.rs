use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::query::model::query_mode::QueryMode;
use crate::errors::AppError;

/// Reads search templates from a directory on every call, so edits on disk
/// apply to the next request.
#[derive(Debug, Clone)]
pub struct QueryTemplateFsAdapter {
    dir: PathBuf,
}

impl QueryTemplateFsAdapter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn template_path(&self, mode: QueryMode) -> PathBuf {
        self.dir.join(mode.template_file_name())
    }

    pub async fn read(&self, mode: QueryMode) -> Result<String, AppError> {
        let path = self.template_path(mode);
        debug!(path = %path.display(), "Loading search template");

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| AppError::Render(format!("open {}: {}", path.display(), e)))
    }
}
