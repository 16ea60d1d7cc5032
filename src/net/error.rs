//! Error taxonomy for the HTTP layer.
//!
//! ERROR HANDLING
//! ==============
//! Only the cross-cutting authentication-expiry case is handled inside the
//! HTTP client; everything else is returned unchanged for the caller to
//! handle. There are no retries.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a request issued through [`crate::net::http::HttpClient`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HttpError {
    /// Transport failure or malformed response body.
    #[error("network error: {0}")]
    Network(String),

    /// HTTP 401. The client has already cleared the session and requested a
    /// redirect to `/login` by the time the caller sees this.
    #[error("authentication required")]
    Unauthorized {
        /// Server-provided `error` message, when the body carried one.
        message: Option<String>,
    },

    /// Any other non-2xx status.
    #[error("request failed with status {status}")]
    Api {
        status: u16,
        /// Server-provided `error` message, when the body carried one.
        message: Option<String>,
    },
}

impl HttpError {
    /// The server-provided message, if this error carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Network(_) => None,
            Self::Unauthorized { message } | Self::Api { message, .. } => message.as_deref(),
        }
    }
}

/// Pull the displayable `error` field out of a JSON error body.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(ToOwned::to_owned)
}
