//! Page components, one per route.

pub mod chat;
pub mod login;
