use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,  // hex SHA-256 of the registration name
    pub name: String,
    pub credit: i64,      // smallest currency unit, never below zero
}

/// Token of a request that made it through the authorization middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

impl AuthenticatedUser {
    pub fn token(&self) -> &str {
        &self.0
    }
}
