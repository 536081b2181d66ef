use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Template error: {0}")]
    Render(String),

    #[error("Search backend error: {0}")]
    Search(String),

    #[error("Failed to decode search response: {0}")]
    Decode(String),

    #[error("Failed to encode records: {0}")]
    Serialization(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // Every pipeline failure is reported the same way to callers
            AppError::Render(_)
            | AppError::Search(_)
            | AppError::Decode(_)
            | AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Plain-text body; String responses carry text/plain; charset=utf-8
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[tokio::test]
    async fn pipeline_errors_become_plain_text_500() {
        let resp = AppError::Decode("missing field `aggregations`".into()).into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(
            String::from_utf8(body.to_vec()).unwrap(),
            "Failed to decode search response: missing field `aggregations`"
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            AppError::NotFound("/nope".into()).status(),
            StatusCode::NOT_FOUND
        );
    }
}
