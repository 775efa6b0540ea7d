// In-process stand-in for Redis used by the tests. Any operation can be made
// to fail or to find no row, and authorization lookups are counted.
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use redis::{ErrorKind, RedisError};
use crate::errors::StoreResult;
use crate::models::User;
use crate::services::hashing::sha256_hex;
use crate::services::store::{ContentStore, CredentialStore};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<String, (String, i64)>>,
    texts: Mutex<HashMap<String, String>>,
    failing: Mutex<HashSet<&'static str>>,
    missing: Mutex<HashSet<&'static str>>,
    exists_calls: AtomicUsize,
}

impl MemoryStore {
    /// Seeds a user whose token is the SHA-256 of `name`, returning the token.
    pub fn add_user(&self, name: &str, credit: i64) -> String {
        let token = sha256_hex(name);
        self.users
            .lock()
            .unwrap()
            .insert(token.clone(), (name.to_string(), credit));
        token
    }

    /// Makes every later call to `operation` fail.
    pub fn fail(&self, operation: &'static str) {
        self.failing.lock().unwrap().insert(operation);
    }

    /// Makes every later call to `operation` behave as if the user row were
    /// gone, while the rest of the store still sees it.
    pub fn miss(&self, operation: &'static str) {
        self.missing.lock().unwrap().insert(operation);
    }

    pub fn credit_of(&self, token: &str) -> Option<i64> {
        self.users.lock().unwrap().get(token).map(|(_, credit)| *credit)
    }

    pub fn text_count(&self) -> usize {
        self.texts.lock().unwrap().len()
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    fn check(&self, operation: &'static str) -> StoreResult<()> {
        if self.failing.lock().unwrap().contains(operation) {
            let error = RedisError::from((ErrorKind::IoError, "connection refused"));
            return Err(error.into());
        }
        Ok(())
    }

    fn is_missing(&self, operation: &'static str) -> bool {
        self.missing.lock().unwrap().contains(operation)
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn user_exists(&self, token: &str) -> StoreResult<bool> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        self.check("user_exists")?;
        Ok(self.users.lock().unwrap().contains_key(token))
    }

    async fn find_user(&self, token: &str) -> StoreResult<Option<User>> {
        self.check("find_user")?;
        if self.is_missing("find_user") {
            return Ok(None);
        }
        Ok(self.users.lock().unwrap().get(token).map(|(name, credit)| User {
            user_id: token.to_string(),
            name: name.clone(),
            credit: *credit,
        }))
    }

    async fn credit(&self, token: &str) -> StoreResult<Option<i64>> {
        self.check("credit")?;
        if self.is_missing("credit") {
            return Ok(None);
        }
        Ok(self.credit_of(token))
    }

    async fn debit(&self, token: &str) -> StoreResult<Option<i64>> {
        self.check("debit")?;
        if self.is_missing("debit") {
            return Ok(None);
        }
        let mut users = self.users.lock().unwrap();
        Ok(users.get_mut(token).map(|(_, credit)| {
            *credit = (*credit - 1).max(0);
            *credit
        }))
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn insert_text(&self, hash: &str, text: &str) -> StoreResult<bool> {
        self.check("insert_text")?;
        let mut texts = self.texts.lock().unwrap();
        if texts.contains_key(hash) {
            return Ok(false);
        }
        texts.insert(hash.to_string(), text.to_string());
        Ok(true)
    }

    async fn find_text(&self, hash: &str) -> StoreResult<Option<String>> {
        self.check("find_text")?;
        Ok(self.texts.lock().unwrap().get(hash).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn debit_floors_at_zero() {
        let store = MemoryStore::default();
        let token = store.add_user("Petra", 1);

        assert_eq!(store.debit(&token).await.unwrap(), Some(0));
        assert_eq!(store.debit(&token).await.unwrap(), Some(0));
        assert_eq!(store.debit("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn missing_row_only_affects_the_named_operation() {
        let store = MemoryStore::default();
        let token = store.add_user("Jane", 5);
        store.miss("find_user");

        assert!(store.user_exists(&token).await.unwrap());
        assert_eq!(store.find_user(&token).await.unwrap(), None);
        assert_eq!(store.credit(&token).await.unwrap(), Some(5));
    }

    #[tokio::test]
    async fn failing_operation_returns_a_redis_error() {
        let store = MemoryStore::default();
        store.fail("find_text");

        let error = store.find_text("h").await.unwrap_err();
        assert!(error.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn insert_is_first_writer_wins() {
        let store = MemoryStore::default();
        assert!(store.insert_text("h", "first").await.unwrap());
        assert!(!store.insert_text("h", "second").await.unwrap());
        assert_eq!(store.find_text("h").await.unwrap().as_deref(), Some("first"));
    }
}
