//! Compile-time client configuration.
//!
//! The API origin is fixed at build time. Changing it means rebuilding the
//! client; there is no runtime configuration surface.

/// Origin of the JSON API the client talks to.
pub const API_BASE_URL: &str = "http://localhost:3000";

/// Path of the credentials login endpoint, relative to [`API_BASE_URL`].
pub const LOGIN_PATH: &str = "/api/v1/auth/login";
