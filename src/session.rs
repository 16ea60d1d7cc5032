//! Persisted session storage.
//!
//! DESIGN
//! ======
//! The session lives under two keys: `token` (plain string) and `user`
//! (JSON-serialized). All writes go through the typed API (`store`, `clear`)
//! so the store is the single writer of both keys; raw key access stays
//! private. The browser backend persists to `localStorage`; the in-memory
//! backend carries SSR and native tests, where no `window` exists.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::net::types::User;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the JSON-serialized user record.
pub const USER_KEY: &str = "user";

/// A point-in-time view of the persisted session.
///
/// `token` absent means logged out; `user` is only meaningful while a token
/// is present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

/// Durable key-value session store shared by the HTTP client and auth store.
#[derive(Clone)]
pub struct SessionStore {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    Memory(Arc<Mutex<HashMap<String, String>>>),
    #[cfg(feature = "hydrate")]
    Browser,
}

/// Lock a mutex, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SessionStore {
    /// Store backed by `localStorage` in the browser. Falls back to an
    /// in-memory map when no browser environment exists (SSR).
    pub fn browser() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self { backend: Backend::Browser }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::in_memory()
        }
    }

    /// Store backed by a shared in-memory map.
    pub fn in_memory() -> Self {
        Self { backend: Backend::Memory(Arc::default()) }
    }

    /// The persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
    }

    /// The persisted user record, if any.
    ///
    /// A malformed value is discarded with a warning rather than failing
    /// rehydration.
    pub fn user(&self) -> Option<User> {
        let raw = self.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                leptos::logging::warn!("discarding malformed persisted user: {err}");
                None
            }
        }
    }

    /// Read the whole persisted session at once.
    pub fn snapshot(&self) -> Session {
        Session { token: self.token(), user: self.user() }
    }

    /// Persist a fresh session: both fields, in one call.
    pub fn store(&self, token: &str, user: &User) {
        self.set(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(json) => self.set(USER_KEY, &json),
            Err(err) => leptos::logging::warn!("failed to serialize user for persistence: {err}"),
        }
    }

    /// Remove both persisted fields.
    pub fn clear(&self) {
        self.remove(TOKEN_KEY);
        self.remove(USER_KEY);
    }

    fn get(&self, key: &str) -> Option<String> {
        match &self.backend {
            Backend::Memory(map) => lock(map).get(key).cloned(),
            #[cfg(feature = "hydrate")]
            Backend::Browser => local_storage()?.get_item(key).ok().flatten(),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match &self.backend {
            Backend::Memory(map) => {
                lock(map).insert(key.to_owned(), value.to_owned());
            }
            #[cfg(feature = "hydrate")]
            Backend::Browser => {
                if let Some(storage) = local_storage() {
                    if storage.set_item(key, value).is_err() {
                        leptos::logging::warn!("failed to persist {key}");
                    }
                }
            }
        }
    }

    fn remove(&self, key: &str) {
        match &self.backend {
            Backend::Memory(map) => {
                lock(map).remove(key);
            }
            #[cfg(feature = "hydrate")]
            Backend::Browser => {
                if let Some(storage) = local_storage() {
                    if storage.remove_item(key).is_err() {
                        leptos::logging::warn!("failed to remove {key}");
                    }
                }
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
