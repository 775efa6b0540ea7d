//! Text-for-hash exchange service.
//!
//! Callers identify themselves with an `X-HashText-User-ID` token, spend one
//! credit to store a text under its SHA-256, and can read any stored text
//! back by hash. Users and texts live in Redis.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
