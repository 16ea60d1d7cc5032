//! JSON HTTP client bound to the API origin.
//!
//! SYSTEM CONTEXT
//! ==============
//! One shared client instance serves the whole app. Every request runs
//! through the standard interceptor chain (bearer attachment, session-expiry
//! detection); responses run through a pure status/body pipeline so the
//! error taxonomy is decided without a browser. Only the 401 case has side
//! effects here; every other failure is handed back to the caller untouched.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Server-side and native
//! tests: the transport is unavailable and requests fail with a network
//! error, same as the REST helpers' SSR stubs.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::{HttpError, extract_error_message};
use crate::net::middleware::{Directive, InterceptorChain, Method, RequestContext};
use crate::routing::routes;
use crate::session::{SessionStore, lock};
use crate::util::navigate;

/// HTTP client with a fixed base address, default JSON headers, and the
/// standard interceptor chain installed.
pub struct HttpClient {
    base_url: String,
    session: SessionStore,
    default_token: Arc<Mutex<Option<String>>>,
    chain: InterceptorChain,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        let default_token = Arc::new(Mutex::new(None));
        let chain = InterceptorChain::standard(session.clone(), Arc::clone(&default_token));
        Self { base_url: base_url.into(), session, default_token, chain }
    }

    /// Install a default bearer token, used when no token is persisted.
    pub fn set_default_token(&self, token: &str) {
        *lock(&self.default_token) = Some(token.to_owned());
    }

    /// Drop the default bearer token.
    pub fn clear_default_token(&self) {
        *lock(&self.default_token) = None;
    }

    /// The currently installed default bearer token, if any.
    pub fn default_token(&self) -> Option<String> {
        lock(&self.default_token).clone()
    }

    /// POST a JSON body and decode a JSON response.
    ///
    /// # Errors
    ///
    /// [`HttpError::Network`] on transport or decode failure,
    /// [`HttpError::Unauthorized`] on 401 (after the forced logout side
    /// effects), [`HttpError::Api`] on any other non-2xx status.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let payload =
            serde_json::to_string(body).map_err(|err| HttpError::Network(err.to_string()))?;
        let ctx = self.prepare(Method::Post, path, Some(payload));
        let (status, text) = self.dispatch(ctx).await?;
        self.finish(status, &text)
    }

    /// GET a JSON response.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::post_json`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let ctx = self.prepare(Method::Get, path, None);
        let (status, text) = self.dispatch(ctx).await?;
        self.finish(status, &text)
    }

    /// Assemble the outgoing request and run it through the chain.
    fn prepare(&self, method: Method, path: &str, body: Option<String>) -> RequestContext {
        let mut ctx = RequestContext::new(method, format!("{}{path}", self.base_url));
        ctx.set_header("Content-Type", "application/json");
        ctx.set_header("Accept", "application/json");
        ctx.body = body;
        self.chain.apply_request(&mut ctx);
        ctx
    }

    /// Execute the response directive, then map `(status, body)` into the
    /// caller's result.
    fn finish<T: DeserializeOwned>(&self, status: u16, body: &str) -> Result<T, HttpError> {
        if self.chain.inspect_response(status) == Directive::ExpireSession {
            self.expire_session();
        }
        process_response(status, body)
    }

    /// Forced logout: clear the session and leave for the login page.
    fn expire_session(&self) {
        leptos::logging::warn!("authentication expired; clearing session");
        self.session.clear();
        self.clear_default_token();
        navigate::hard_redirect(routes::LOGIN.path);
    }

    #[allow(clippy::unused_async)]
    async fn dispatch(&self, ctx: RequestContext) -> Result<(u16, String), HttpError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = match ctx.method {
                Method::Get => gloo_net::http::Request::get(&ctx.url),
                Method::Post => gloo_net::http::Request::post(&ctx.url),
            };
            let builder = ctx
                .headers
                .iter()
                .fold(builder, |builder, (name, value)| builder.header(name, value));
            let request = match ctx.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|err| HttpError::Network(err.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|err| HttpError::Network(err.to_string()))?;
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|err| HttpError::Network(err.to_string()))?;
            Ok((status, text))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ctx;
            Err(HttpError::Network("not available on server".to_owned()))
        }
    }
}

/// Map `(status, body)` to the caller's result. Pure.
pub(crate) fn process_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, HttpError> {
    if (200..300).contains(&status) {
        serde_json::from_str(body)
            .map_err(|err| HttpError::Network(format!("malformed response body: {err}")))
    } else if status == 401 {
        Err(HttpError::Unauthorized { message: extract_error_message(body) })
    } else {
        Err(HttpError::Api { status, message: extract_error_message(body) })
    }
}
