//! HTTP networking: client, interceptor chain, errors, and wire DTOs.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the shared client, `middleware` the interceptor chain it runs
//! every request through, `error` the failure taxonomy, and `types` the login
//! wire schema.

pub mod error;
pub mod http;
pub mod middleware;
pub mod types;
