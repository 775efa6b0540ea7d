use axum::{
    extract::{Extension, State},
    response::Response,
};
use crate::errors::{AppError, AppResult};
use crate::handlers::document::json_document;
use crate::models::AuthenticatedUser;
use crate::state::AppState;

/// `GET /user/me`
pub async fn current_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Response> {
    // Second, independent query: the row may have gone since the gate saw it
    let found = state
        .users
        .find_user(user.token())
        .await
        .map_err(|e| {
            tracing::error!(operation = "find_user", user_id = %user.token(), "Query to look up user failed: {}", e);
            AppError::Store(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("user {}", user.token())))?;

    tracing::debug!("Found user {} with credit {}", found.name, found.credit);
    json_document(&found)
}
