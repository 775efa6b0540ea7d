mod hashing;
mod redis_service;
mod store;

#[cfg(test)]
pub mod memory;

pub use hashing::sha256_hex;
pub use redis_service::RedisService;
pub use store::{ContentStore, CredentialStore};
