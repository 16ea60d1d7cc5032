//! Full-page navigation.
//!
//! A hard redirect tears down the whole app, unlike an in-app route change:
//! nothing of the old session survives the reload. Requires a browser
//! environment; a no-op everywhere else.

/// Navigate the browser to `path`, replacing the running app.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                leptos::logging::warn!("failed to navigate to {path}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
