use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::errors::AppError;

/// Serializes `value` as the JSON body of a 200 response.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Response, AppError> {
    let body = serde_json::to_vec(value).map_err(|e| AppError::Serialization(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
