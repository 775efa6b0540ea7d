use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use crate::errors::AppError;
use crate::models::AuthenticatedUser;
use crate::state::AppState;

// `X-HashText-User-ID`; header names are matched case-insensitively.
pub const USER_ID_HEADER: &str = "x-hashtext-user-id";

// Missing, empty and non-UTF-8 values all count as no token.
fn user_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Gate in front of every route: exactly one user lookup per request, no
/// caching. Handlers receive the token as an `AuthenticatedUser` extension.
pub async fn require_user(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(token) = user_token(req.headers()) else {
        tracing::debug!("Rejecting {} {} without a user token", req.method(), req.uri().path());
        return AppError::Unauthorized.into_response();
    };

    match state.users.user_exists(&token).await {
        Ok(true) => {
            req.extensions_mut().insert(AuthenticatedUser(token));
            next.run(req).await
        }
        Ok(false) => {
            tracing::info!("Rejecting unknown user token: {}", token);
            AppError::Unauthorized.into_response()
        }
        Err(e) => {
            tracing::error!(operation = "user_exists", user_id = %token, "Query to look up user failed: {}", e);
            AppError::Store(e).into_response()
        }
    }
}
