use redis::RedisError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] RedisError),
}

pub type StoreResult<T> = Result<T, StoreError>;
