use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Extension, Path, State,
    },
    http::StatusCode,
    response::Response,
};
use crate::errors::{AppError, AppResult};
use crate::handlers::document::json_document;
use crate::models::{AuthenticatedUser, HashDocument, TextDocument};
use crate::services::sha256_hex;
use crate::state::AppState;

/// `POST /text`
///
/// Checks credit before looking at the body, stores the text under its
/// SHA-256 (first writer wins) and charges one credit per call, whether or
/// not the text was new. Storing and charging are independent: if the charge
/// fails the caller still gets the hash.
///
/// Body buffering failures (oversized or broken bodies) are reported only
/// after the credit check, with empty bodies.
#[axum::debug_handler]
pub async fn submit_text(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Response> {
    let token = user.token();

    let credit = state.users.credit(token).await.map_err(|e| {
        tracing::error!(operation = "credit", user_id = %token, "Query to look up credit failed: {}", e);
        AppError::Store(e)
    })?;
    // A missing row has no credit either
    if credit.unwrap_or(0) <= 0 {
        tracing::info!("User {} is out of credit", token);
        return Err(AppError::PaymentRequired(token.to_string()));
    }

    let body = body.map_err(|rejection| body_error(token, rejection))?;

    let document: TextDocument = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Could not decode the request body as JSON: {}", e);
        AppError::BadRequest(e.to_string())
    })?;

    let hash = sha256_hex(&document.text);
    let inserted = state
        .texts
        .insert_text(&hash, &document.text)
        .await
        .map_err(|e| {
            tracing::error!(operation = "insert_text", hash = %hash, "Failed to insert text: {}", e);
            AppError::Store(e)
        })?;
    tracing::debug!("Stored text with hash {} (new: {})", hash, inserted);

    match state.users.debit(token).await {
        Ok(Some(remaining)) => tracing::debug!("Debited user {}, {} credit left", token, remaining),
        Ok(None) => tracing::warn!("User {} disappeared before the debit", token),
        Err(e) => {
            tracing::error!(operation = "debit", user_id = %token, "Failed to debit user: {}", e);
        }
    }

    json_document(&HashDocument { hash })
}

fn body_error(token: &str, rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::info!("Rejecting oversized body from user {}", token);
        return AppError::PayloadTooLarge;
    }
    tracing::error!("Failed to read the request body from user {}: {}", token, rejection);
    AppError::Internal(format!("body read failed: {}", rejection))
}

/// `GET /text/:hash`
///
/// Any authorized user may read any text. The hash is matched exactly and
/// not validated, so a malformed one is simply not found. That includes a
/// segment that does not even decode to UTF-8.
pub async fn text_by_hash(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    hash: Result<Path<String>, PathRejection>,
) -> AppResult<Response> {
    let Path(hash) = hash.map_err(|rejection| {
        tracing::debug!("Undecodable hash segment: {}", rejection);
        AppError::NotFound(rejection.body_text())
    })?;

    let text = state
        .texts
        .find_text(&hash)
        .await
        .map_err(|e| {
            tracing::error!(operation = "find_text", hash = %hash, "Query to look up text by hash failed: {}", e);
            AppError::Store(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("text {}", hash)))?;

    tracing::debug!("User {} read text {}", user.token(), hash);
    json_document(&TextDocument { text })
}
