use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use crate::errors::AppError;

pub const OUT_OF_CREDIT_MESSAGE: &str = "You are out of credit. Please pay us more money.";

pub const PLAIN_TEXT_UTF8: &str = "text/plain; charset=UTF-8";

// Only the 402 carries a body. Everything else is a bare status code so
// nothing about the storage layer leaks to the caller.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),

            AppError::BadRequest(_) => StatusCode::BAD_REQUEST.into_response(),

            AppError::PaymentRequired(_) => (
                StatusCode::PAYMENT_REQUIRED,
                [(header::CONTENT_TYPE, PLAIN_TEXT_UTF8)],
                OUT_OF_CREDIT_MESSAGE,
            ).into_response(),

            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE.into_response(),

            AppError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),

            AppError::Store(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
