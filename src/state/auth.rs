//! Auth-session state and operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthStore` is the single writer of the session: login persists it,
//! logout clears it, initialize rehydrates the client default token at
//! startup. The HTTP client's 401 handler is the one other component allowed
//! to clear persisted state. Components read `AuthState` through the store's
//! signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::{RwSignal, Update, With};

use crate::config;
use crate::net::error::HttpError;
use crate::net::http::HttpClient;
use crate::net::types::{LoginRequest, LoginResponse, User};
use crate::session::{Session, SessionStore};

/// In-memory session state, mirrored into persisted storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl AuthState {
    /// Rehydrate from a persisted session snapshot.
    pub fn from_session(session: &Session) -> Self {
        Self { token: session.token.clone(), user: session.user.clone() }
    }

    /// Logged in exactly when a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Owns the session lifecycle: login, logout, startup rehydration.
#[derive(Clone)]
pub struct AuthStore {
    http: Arc<HttpClient>,
    session: SessionStore,
    state: RwSignal<AuthState>,
}

impl AuthStore {
    /// Build the store over the shared client and session storage, seeding
    /// in-memory state from whatever the storage already holds.
    pub fn new(http: Arc<HttpClient>, session: SessionStore) -> Self {
        let state = RwSignal::new(AuthState::from_session(&session.snapshot()));
        Self { http, session, state }
    }

    /// The reactive state signal, for components.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    /// Exchange credentials for a session.
    ///
    /// On success the session is set everywhere at once: client default
    /// token, in-memory state, persisted storage. On failure nothing is
    /// mutated and the server's message (or a generic fallback) comes back
    /// for display.
    ///
    /// # Errors
    ///
    /// A user-displayable message.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, String> {
        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        match self.http.post_json::<_, LoginResponse>(config::LOGIN_PATH, &request).await {
            Ok(body) => {
                self.state.update(|state| apply_login(state, &self.session, &self.http, &body));
                Ok(body)
            }
            Err(err) => {
                leptos::logging::warn!("login failed: {err}");
                Err(login_error_message(&err))
            }
        }
    }

    /// Drop the session everywhere. Always succeeds.
    pub fn logout(&self) {
        self.state.update(|state| apply_logout(state, &self.session, &self.http));
    }

    /// Startup hook: reinstall a persisted token as the client default.
    /// Does not re-validate the token with the server.
    pub fn initialize(&self) {
        restore_default_token(&self.session, &self.http);
    }
}

/// Commit a successful login to state, storage, and client defaults.
pub(crate) fn apply_login(
    state: &mut AuthState,
    session: &SessionStore,
    http: &HttpClient,
    body: &LoginResponse,
) {
    http.set_default_token(&body.token);
    state.token = Some(body.token.clone());
    state.user = Some(body.user.clone());
    session.store(&body.token, &body.user);
}

/// Clear state, storage, and client defaults.
pub(crate) fn apply_logout(state: &mut AuthState, session: &SessionStore, http: &HttpClient) {
    state.token = None;
    state.user = None;
    session.clear();
    http.clear_default_token();
}

/// Reinstall a persisted token as the client default, if one exists.
pub(crate) fn restore_default_token(session: &SessionStore, http: &HttpClient) {
    if let Some(token) = session.token() {
        http.set_default_token(&token);
    }
}

/// Map a login failure to the message the form shows.
pub(crate) fn login_error_message(err: &HttpError) -> String {
    err.server_message().map_or_else(|| "Login failed".to_owned(), ToOwned::to_owned)
}
