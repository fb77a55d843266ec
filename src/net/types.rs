//! Wire DTOs for the authentication endpoints.
//!
//! DESIGN
//! ======
//! Request shapes mirror the server contract; response payloads stay opaque
//! `serde_json::Value`s passed through to callers unmodified.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Registration payload for `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUser {
    /// Display name for the new account.
    pub username: String,
    /// Account email; doubles as the login identifier.
    pub email: String,
    pub password: String,
}

/// Credentials payload for `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
