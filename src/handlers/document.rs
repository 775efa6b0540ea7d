use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use crate::errors::{AppError, AppResult};

pub const JSON_UTF8: &str = "application/json; charset=UTF-8";

/// 200 with `data` as a JSON body.
pub fn json_document<T: Serialize>(data: &T) -> AppResult<Response> {
    let body = serde_json::to_vec(data).map_err(|e| {
        tracing::error!("Failed to encode a JSON response: {}", e);
        AppError::Internal(format!("JSON encoding failed: {}", e))
    })?;

    Ok(([(header::CONTENT_TYPE, JSON_UTF8)], body).into_response())
}
