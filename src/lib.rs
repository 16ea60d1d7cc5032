//! # chat-client
//!
//! Leptos + WASM single-page chat client: credentials login, persisted
//! session handling, and guarded routing over a JSON HTTP API.
//!
//! The session lives in one place (`session::SessionStore`); the HTTP client
//! attaches it to every outgoing request and tears it down on authentication
//! expiry; the navigation guard keeps unauthenticated users on the login
//! page and logged-in users out of it.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
