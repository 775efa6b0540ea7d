use async_trait::async_trait;
use crate::errors::StoreResult;
use crate::models::User;

/// Users keyed by their opaque token.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn user_exists(&self, token: &str) -> StoreResult<bool>;

    async fn find_user(&self, token: &str) -> StoreResult<Option<User>>;

    /// `None` when the user row is missing.
    async fn credit(&self, token: &str) -> StoreResult<Option<i64>>;

    /// Atomically applies `credit = max(0, credit - 1)` and returns the new
    /// balance, or `None` when the user row is missing.
    async fn debit(&self, token: &str) -> StoreResult<Option<i64>>;
}

/// Texts keyed by the hex SHA-256 of their content.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Insert-if-absent. Returns whether a new row was written.
    async fn insert_text(&self, hash: &str, text: &str) -> StoreResult<bool>;

    async fn find_text(&self, hash: &str) -> StoreResult<Option<String>>;
}
