//! Query controller: connects routes to the datum query usecase

use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::Response;
use chrono::Utc;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::api::dto::query_dto::DatumQueryParams;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::errors::AppError;

pub const USAGE_HINT: &str = "Please see the documentation for the weather API\n";

pub struct QueryController;

impl QueryController {
    pub async fn index() -> &'static str {
        USAGE_HINT
    }

    pub async fn query(
        State(state): State<AppState>,
        uri: Uri,
        Query(pairs): Query<Vec<(String, String)>>,
    ) -> Result<Response, AppError> {
        let params = DatumQueryParams::from_pairs(pairs);
        let mode = params.mode();
        let query = params.into_datum_query(Utc::now());

        let span = info_span!(
            "query",
            request_id = %Uuid::new_v4(),
            site = %query.site,
            datum = %query.datum_name,
            mode = mode.as_str(),
        );

        async move {
            info!(%uri, start = %query.start, end = %query.end, "Datum query");

            let records = state
                .query_service
                .query(&query, mode)
                .await
                .inspect_err(|err| error!(error = %err, "Datum query failed"))?;

            to_json(&records)
        }
        .instrument(span)
        .await
    }
}
