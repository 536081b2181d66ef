use axum::{
    http::{Method, Uri},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::app_state::AppState;
use crate::errors::AppError;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    Router::new()
        .merge(crate::api::routes::query_routes::query_routes())
        // Fallback handler for 404
        .fallback(handler_404)
        // Wildcard Access-Control-Allow-Origin on every response
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        )
}

// Handler for 404 Not Found
async fn handler_404(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::core::client::search_client::SearchBackend;
    use crate::core::persistence::template::query_template_fs_adapter::QueryTemplateFsAdapter;
    use crate::domain::query::service::datum_query_service::DatumQueryService;
    use crate::domain::query::service::query_render_service::QueryRenderer;

    const AGG_RESPONSE: &str = r#"{"aggregations":{
        "date(timestamp,15m)":{"buckets":[
            {"key_as_string":"2017-04-01T00:00:00Z","key":1491004800000,"doc_count":3,"avg(value_float)":{"value":5.0}},
            {"key_as_string":"2017-04-01T00:15:00Z","key":1491005700000,"doc_count":2,"avg(value_float)":{"value":6.5}}]},
        "date(timestampmeasured,15m)":{"buckets":[
            {"key_as_string":"2017-04-01T00:00:00Z","key":1491004800000,"doc_count":3}]}}}"#;

    const RAW_RESPONSE: &str = r#"{"hits":{"hits":[{"_source":{
        "timestamp":"2017-04-01T00:00:00Z","value_float":3.2,
        "value_string":"ok","timestampmeasured":"2017-04-01T00:00:05Z"}}]}}"#;

    /// Answers according to which template was rendered and remembers the body.
    #[derive(Default)]
    struct MockBackend {
        last_body: Mutex<Option<String>>,
    }

    #[async_trait]
    impl SearchBackend for MockBackend {
        async fn send(&self, body: Vec<u8>) -> Result<Vec<u8>, AppError> {
            let body = String::from_utf8(body).unwrap();
            let reply = if body.contains("\"mode\":\"agg\"") {
                AGG_RESPONSE
            } else {
                RAW_RESPONSE
            };
            *self.last_body.lock().unwrap() = Some(body);
            Ok(reply.as_bytes().to_vec())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl SearchBackend for FailingBackend {
        async fn send(&self, _body: Vec<u8>) -> Result<Vec<u8>, AppError> {
            Err(AppError::Search("connection refused".into()))
        }
    }

    fn template_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("aggsearchtemplate.json"),
            r#"{"mode":"agg","site":"{{.Site}}","datum":"{{.DatumName}}","start":"{{.Start}}","end":"{{.End}}"}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("searchtemplate.json"),
            r#"{"mode":"raw","site":"{{.Site}}","datum":"{{.DatumName}}","start":"{{.Start}}","end":"{{.End}}"}"#,
        )
        .unwrap();
        dir
    }

    fn app(dir: &std::path::Path, backend: Arc<dyn SearchBackend>) -> Router {
        let renderer = QueryRenderer::new(QueryTemplateFsAdapter::new(dir));
        let state = AppState {
            query_service: Arc::new(DatumQueryService::new(renderer, backend)),
        };
        app_router().with_state(state)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let resp = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header(header::ORIGIN, "http://dashboard.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn root_serves_usage_hint() {
        let dir = template_dir();
        let (status, _, body) = get(app(dir.path(), Arc::new(MockBackend::default())), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("weather API"));
    }

    #[tokio::test]
    async fn aggregated_query_is_the_default() {
        let dir = template_dir();
        let backend = Arc::new(MockBackend::default());
        let (status, headers, body) = get(
            app(dir.path(), backend.clone()),
            "/query?site=lsc&datumname=Temperature&start=2017-04-01T00:00:00Z&end=2017-04-02T00:00:00Z",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let records: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            records,
            serde_json::json!([
                {"TimeStamp":"2017-04-01T00:00:00Z","Value":5.0,"ValueString":"","TimeStampMeasured":"2017-04-01T00:00:00Z"},
                {"TimeStamp":"2017-04-01T00:15:00Z","Value":6.5,"ValueString":"","TimeStampMeasured":""}
            ])
        );

        let sent = backend.last_body.lock().unwrap().clone().unwrap();
        assert_eq!(
            sent,
            r#"{"mode":"agg","site":"lsc","datum":"Temperature","start":"2017-04-01T00:00:00Z","end":"2017-04-02T00:00:00Z"}"#
        );
    }

    #[tokio::test]
    async fn agg_true_selects_aggregation() {
        let dir = template_dir();
        let backend = Arc::new(MockBackend::default());
        let (status, _, _) = get(app(dir.path(), backend.clone()), "/query?site=lsc&datumname=T&agg=true").await;

        assert_eq!(status, StatusCode::OK);
        assert!(backend.last_body.lock().unwrap().as_ref().unwrap().contains("\"mode\":\"agg\""));
    }

    #[tokio::test]
    async fn repeated_params_use_their_first_value() {
        let dir = template_dir();
        let backend = Arc::new(MockBackend::default());
        let (status, _, _) = get(
            app(dir.path(), backend.clone()),
            "/query?agg=true&agg=false&site=a&site=b&datumname=T",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let sent = backend.last_body.lock().unwrap().clone().unwrap();
        let sent: serde_json::Value = serde_json::from_str(&sent).unwrap();
        assert_eq!(sent["mode"], "agg");
        assert_eq!(sent["site"], "a");
    }

    #[tokio::test]
    async fn any_other_agg_value_selects_raw_hits() {
        for agg in ["false", "banana"] {
            let dir = template_dir();
            let backend = Arc::new(MockBackend::default());
            let (status, _, body) = get(
                app(dir.path(), backend.clone()),
                &format!("/query?site=lsc&datumname=T&agg={}", agg),
            )
            .await;

            assert_eq!(status, StatusCode::OK);
            assert!(backend.last_body.lock().unwrap().as_ref().unwrap().contains("\"mode\":\"raw\""));
            let records: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(
                records,
                serde_json::json!([
                    {"TimeStamp":"2017-04-01T00:00:00Z","Value":3.2,"ValueString":"ok","TimeStampMeasured":"2017-04-01T00:00:05Z"}
                ])
            );
        }
    }

    #[tokio::test]
    async fn omitted_window_defaults_to_last_day() {
        let dir = template_dir();
        let backend = Arc::new(MockBackend::default());
        let (status, _, _) = get(app(dir.path(), backend.clone()), "/query?site=lsc&datumname=T").await;
        assert_eq!(status, StatusCode::OK);

        let sent = backend.last_body.lock().unwrap().clone().unwrap();
        let sent: serde_json::Value = serde_json::from_str(&sent).unwrap();
        let parse = |s: &serde_json::Value| {
            chrono::NaiveDateTime::parse_from_str(s.as_str().unwrap(), "%Y-%m-%dT%H:%M:%SZ").unwrap()
        };
        assert_eq!(
            parse(&sent["end"]) - parse(&sent["start"]),
            chrono::Duration::hours(24)
        );
    }

    #[tokio::test]
    async fn missing_template_returns_500_with_message() {
        let empty = tempfile::tempdir().unwrap();
        let (status, _, body) = get(
            app(empty.path(), Arc::new(MockBackend::default())),
            "/query?site=lsc&datumname=T",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("Template error:"));
        assert!(body.contains("aggsearchtemplate.json"));
    }

    #[tokio::test]
    async fn malformed_template_returns_500() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("searchtemplate.json"), "{{.Site").unwrap();
        let (status, _, body) = get(
            app(dir.path(), Arc::new(MockBackend::default())),
            "/query?agg=false",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.is_empty());
    }

    #[tokio::test]
    async fn backend_failure_returns_500() {
        let dir = template_dir();
        let (status, _, body) = get(app(dir.path(), Arc::new(FailingBackend)), "/query?site=lsc").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Search backend error: connection refused");
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let dir = template_dir();
        let (status, _, body) = get(app(dir.path(), Arc::new(MockBackend::default())), "/api/v1/metrics").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not found: /api/v1/metrics");
    }
}
