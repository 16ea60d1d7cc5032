//! Explicit interceptor chain for the HTTP client.
//!
//! DESIGN
//! ======
//! Interceptors are an ordered list of request transforms and response
//! inspectors, composed deterministically: transforms run front to back, and
//! the first inspector returning a non-[`Directive::Forward`] value decides
//! the response's fate. The chain itself never performs effects; it only
//! rewrites the pending request or names a directive for the client to
//! execute.

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;

use std::sync::{Arc, Mutex};

use crate::session::{SessionStore, lock};

/// HTTP method of a pending request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request being assembled, before it is handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestContext {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestContext {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: Vec::new(), body: None }
    }

    /// Set a header, replacing any existing value under the same name.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(existing) = self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            existing.1 = value;
        } else {
            self.headers.push((name.to_owned(), value));
        }
    }

    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// What the client must do with a response, decided from its status alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Hand the response to the normal pipeline.
    Forward,
    /// The session is no longer valid: clear it and force a full navigation
    /// to the login page before the caller sees the error.
    ExpireSession,
}

type RequestTransform = Box<dyn Fn(&mut RequestContext) + Send + Sync>;
type ResponseInspector = Box<dyn Fn(u16) -> Directive + Send + Sync>;

/// Ordered request/response interceptors.
#[derive(Default)]
pub struct InterceptorChain {
    request: Vec<RequestTransform>,
    response: Vec<ResponseInspector>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// The chain every client starts with: bearer-token attachment on the
    /// way out, session-expiry detection on the way back.
    pub fn standard(session: SessionStore, default_token: Arc<Mutex<Option<String>>>) -> Self {
        let mut chain = Self::new();
        chain.on_request(move |ctx| {
            // Persisted token wins; the client default is the fallback.
            let token = session.token().or_else(|| lock(&default_token).clone());
            if let Some(token) = token {
                leptos::logging::log!("attaching bearer token to {}", ctx.url);
                ctx.set_header("Authorization", format!("Bearer {token}"));
            }
        });
        chain.on_response(|status| {
            if status == 401 { Directive::ExpireSession } else { Directive::Forward }
        });
        chain
    }

    pub fn on_request(&mut self, transform: impl Fn(&mut RequestContext) + Send + Sync + 'static) {
        self.request.push(Box::new(transform));
    }

    pub fn on_response(&mut self, inspector: impl Fn(u16) -> Directive + Send + Sync + 'static) {
        self.response.push(Box::new(inspector));
    }

    /// Run every request transform, in registration order.
    pub fn apply_request(&self, ctx: &mut RequestContext) {
        for transform in &self.request {
            transform(ctx);
        }
    }

    /// Ask each inspector in order; the first non-`Forward` directive wins.
    pub fn inspect_response(&self, status: u16) -> Directive {
        for inspector in &self.response {
            let directive = inspector(status);
            if directive != Directive::Forward {
                return directive;
            }
        }
        Directive::Forward
    }
}
