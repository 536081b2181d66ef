//! Query routes (e.g., /query)

use axum::{routing::get, Router};

use crate::api::controller::query::QueryController;
use crate::app_state::AppState;

pub fn query_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(QueryController::index))
        .route("/query", get(QueryController::query))
}
