mod auth;

pub use auth::{require_user, USER_ID_HEADER};
