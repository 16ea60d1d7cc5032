//! Navigation guard evaluated before every route transition.
//!
//! DESIGN
//! ======
//! The guard is a pure, total function from `(target route, session token)`
//! to exactly one decision. It reads the token straight from persisted
//! storage at evaluation time (not from in-memory state), so a session
//! cleared behind the store's back still locks the user out on the next
//! transition.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routing::routes::{self, RouteDescriptor};

/// Outcome of evaluating a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Let the transition complete.
    Proceed,
    /// Send the user elsewhere instead.
    Redirect(&'static str),
}

/// Decide what happens to a transition targeting `route`.
///
/// - protected route without a token: back to the login page
/// - login page with a token: straight to chat
/// - anything else proceeds
pub fn evaluate(route: &RouteDescriptor, token: Option<&str>) -> Decision {
    if route.meta.requires_auth && token.is_none() {
        Decision::Redirect(routes::LOGIN.path)
    } else if route.path == routes::LOGIN.path && token.is_some() {
        Decision::Redirect(routes::CHAT.path)
    } else {
        Decision::Proceed
    }
}
