use std::sync::Arc;
use crate::services::{ContentStore, CredentialStore, RedisService};

// Shared by every request. Handlers only see the store traits, so tests can
// swap in another backend.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn CredentialStore>,
    pub texts: Arc<dyn ContentStore>,
}

impl AppState {
    pub fn new(users: Arc<dyn CredentialStore>, texts: Arc<dyn ContentStore>) -> Self {
        Self { users, texts }
    }

    /// Serves both stores from one Redis connection manager.
    pub fn from_redis(redis_service: RedisService) -> Self {
        let shared = Arc::new(redis_service);
        Self::new(shared.clone(), shared)
    }
}
