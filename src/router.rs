use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use crate::{handlers, middleware, state::AppState};

/// The three routes, all behind the user-token gate. Unmatched paths fall
/// through to the default 404 without touching the stores.
///
/// `max_body_size` is enforced when `POST /text` buffers its body, which is
/// after the gate, so an unknown token is always a 401.
pub fn build_router(state: AppState, max_body_size: usize) -> Router {
    Router::new()
        .route("/user/me", get(handlers::current_user))
        .route("/text", post(handlers::submit_text))
        .route("/text/:hash", get(handlers::text_by_hash))
        .route_layer(from_fn_with_state(state.clone(), middleware::require_user))
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
