// Error types for the service, built on thiserror, plus the result alias the
// handlers return.
use thiserror::Error;

pub mod response;
pub mod store;

pub use store::{StoreError, StoreResult};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing, empty or unknown user token")]
    Unauthorized,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("user {0} is out of credit")]
    PaymentRequired(String),

    #[error("request body larger than the configured limit")]
    PayloadTooLarge,

    #[error("not found: {0}")]
    NotFound(String),

    // A storage fault. Logged where it happens; the client only sees a 500.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;
