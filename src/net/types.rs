//! Wire DTOs for the auth API.
//!
//! These mirror the server's login payloads so serde round-trips stay
//! lossless; the persisted `user` value is exactly the serialized form of
//! [`User`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials payload for `POST /api/v1/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Success body returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
    /// The authenticated user record.
    pub user: User,
}

/// An authenticated user as returned by the login endpoint.
///
/// Only `id` is guaranteed by the server; optional fields are skipped on
/// serialization so the persisted JSON stays exactly what the server sent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Login email, if the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name, if the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
