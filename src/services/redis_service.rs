use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client, Script};
use crate::errors::StoreResult;
use crate::models::User;
use crate::services::store::{ContentStore, CredentialStore};

// Floors at zero and returns the new balance; nil when the user is missing.
// Runs atomically on the server, which is what serializes concurrent debits.
const DEBIT_SCRIPT: &str = r#"
if redis.call('EXISTS', KEYS[1]) == 0 then
    return false
end
local credit = tonumber(redis.call('HGET', KEYS[1], 'credit') or '0')
local remaining = credit - 1
if remaining < 0 then
    remaining = 0
end
redis.call('HSET', KEYS[1], 'credit', remaining)
return remaining
"#;

/// Redis-backed credential and content store.
///
/// Users live in hashes at `user:{token}` (fields `name`, `credit`), texts in
/// plain strings at `hash_text:{hash}`.
#[derive(Clone)]
pub struct RedisService {
    conn: ConnectionManager,
    debit_script: Script,
}

impl RedisService {
    pub fn new(conn: ConnectionManager) -> Self {
        Self {
            conn,
            debit_script: Script::new(DEBIT_SCRIPT),
        }
    }

    pub async fn connect(client: Client) -> StoreResult<Self> {
        let conn = ConnectionManager::new(client).await?;
        Ok(Self::new(conn))
    }
}

fn user_key(token: &str) -> String {
    format!("user:{}", token)
}

fn text_key(hash: &str) -> String {
    format!("hash_text:{}", hash)
}

#[async_trait]
impl CredentialStore for RedisService {
    async fn user_exists(&self, token: &str) -> StoreResult<bool> {
        let mut conn = self.conn.clone();
        let found: bool = conn.exists(user_key(token)).await?;
        Ok(found)
    }

    async fn find_user(&self, token: &str) -> StoreResult<Option<User>> {
        let mut conn = self.conn.clone();
        let (name, credit): (Option<String>, Option<i64>) = redis::cmd("HMGET")
            .arg(user_key(token))
            .arg("name")
            .arg("credit")
            .query_async(&mut conn)
            .await?;

        // A user without a credit field has the schema default of 0
        Ok(name.map(|name| User {
            user_id: token.to_string(),
            name,
            credit: credit.unwrap_or(0),
        }))
    }

    async fn credit(&self, token: &str) -> StoreResult<Option<i64>> {
        let mut conn = self.conn.clone();
        let credit: Option<i64> = conn.hget(user_key(token), "credit").await?;
        Ok(credit)
    }

    async fn debit(&self, token: &str) -> StoreResult<Option<i64>> {
        let mut conn = self.conn.clone();
        let remaining: Option<i64> = self
            .debit_script
            .key(user_key(token))
            .invoke_async(&mut conn)
            .await?;
        Ok(remaining)
    }
}

#[async_trait]
impl ContentStore for RedisService {
    async fn insert_text(&self, hash: &str, text: &str) -> StoreResult<bool> {
        let mut conn = self.conn.clone();
        let inserted: bool = conn.set_nx(text_key(hash), text).await?;
        Ok(inserted)
    }

    async fn find_text(&self, hash: &str) -> StoreResult<Option<String>> {
        let mut conn = self.conn.clone();
        let text: Option<String> = conn.get(text_key(hash)).await?;
        Ok(text)
    }
}
