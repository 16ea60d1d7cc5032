use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use super::*;
use crate::config;
use crate::net::types::{LoginRequest, LoginResponse, User};

/// Drive a future that never suspends (the native transport fails
/// immediately) to completion.
fn poll_once<T>(fut: impl Future<Output = T>) -> T {
    let mut fut = pin!(fut);
    match fut.as_mut().poll(&mut Context::from_waker(Waker::noop())) {
        Poll::Ready(value) => value,
        Poll::Pending => panic!("future unexpectedly suspended"),
    }
}

fn client_with_session() -> (HttpClient, SessionStore) {
    let session = SessionStore::in_memory();
    (HttpClient::new(config::API_BASE_URL, session.clone()), session)
}

// =============================================================
// Request assembly
// =============================================================

#[test]
fn prepare_joins_base_url_and_path() {
    let (client, _) = client_with_session();
    let ctx = client.prepare(Method::Post, config::LOGIN_PATH, None);

    assert_eq!(ctx.url, "http://localhost:3000/api/v1/auth/login");
}

#[test]
fn prepare_installs_default_json_headers() {
    let (client, _) = client_with_session();
    let ctx = client.prepare(Method::Get, "/api/v1/anything", None);

    assert_eq!(ctx.header("Content-Type"), Some("application/json"));
    assert_eq!(ctx.header("Accept"), Some("application/json"));
}

#[test]
fn prepare_attaches_bearer_from_persisted_session() {
    let (client, session) = client_with_session();
    session.store("abc", &User { id: 1, email: None, name: None });

    let ctx = client.prepare(Method::Get, "/api/v1/anything", None);

    assert_eq!(ctx.header("Authorization"), Some("Bearer abc"));
}

#[test]
fn prepare_uses_default_token_when_nothing_persisted() {
    let (client, _) = client_with_session();
    client.set_default_token("abc");

    let ctx = client.prepare(Method::Get, "/api/v1/anything", None);

    assert_eq!(ctx.header("Authorization"), Some("Bearer abc"));
    client.clear_default_token();
    let ctx = client.prepare(Method::Get, "/api/v1/anything", None);
    assert!(ctx.header("Authorization").is_none());
}

// =============================================================
// Response pipeline
// =============================================================

#[test]
fn success_body_decodes() {
    let body = r#"{"token":"abc","user":{"id":1}}"#;
    let parsed: LoginResponse = process_response(200, body).unwrap();

    assert_eq!(parsed.token, "abc");
    assert_eq!(parsed.user.id, 1);
}

#[test]
fn malformed_success_body_is_a_network_error() {
    let result: Result<LoginResponse, _> = process_response(200, "<html>");

    assert!(matches!(result, Err(HttpError::Network(_))));
}

#[test]
fn status_401_maps_to_unauthorized_with_message() {
    let result: Result<LoginResponse, _> = process_response(401, r#"{"error":"token expired"}"#);

    assert_eq!(
        result.unwrap_err(),
        HttpError::Unauthorized { message: Some("token expired".to_owned()) }
    );
}

#[test]
fn status_422_maps_to_api_error_with_message() {
    let result: Result<LoginResponse, _> =
        process_response(422, r#"{"error":"invalid credentials"}"#);

    assert_eq!(
        result.unwrap_err(),
        HttpError::Api { status: 422, message: Some("invalid credentials".to_owned()) }
    );
}

#[test]
fn status_500_without_json_body_carries_no_message() {
    let result: Result<LoginResponse, _> = process_response(500, "Internal Server Error");

    assert_eq!(result.unwrap_err(), HttpError::Api { status: 500, message: None });
}

// =============================================================
// Session expiry side effects
// =============================================================

#[test]
fn expiry_clears_session_and_default_token() {
    let (client, session) = client_with_session();
    session.store("abc", &User { id: 1, email: None, name: None });
    client.set_default_token("abc");

    let result: Result<LoginResponse, _> = client.finish(401, r#"{"error":"token expired"}"#);

    assert!(matches!(result, Err(HttpError::Unauthorized { .. })));
    assert!(session.token().is_none());
    assert!(session.user().is_none());
    assert!(client.default_token().is_none());
}

#[test]
fn non_401_failures_leave_session_untouched() {
    let (client, session) = client_with_session();
    session.store("abc", &User { id: 1, email: None, name: None });

    let result: Result<LoginResponse, _> = client.finish(422, r#"{"error":"invalid credentials"}"#);

    assert!(matches!(result, Err(HttpError::Api { status: 422, .. })));
    assert_eq!(session.token().as_deref(), Some("abc"));
}

// =============================================================
// Native transport stub
// =============================================================

#[test]
fn requests_off_wasm_fail_with_network_error() {
    let (client, _) = client_with_session();
    let request = LoginRequest { email: "u@example.com".to_owned(), password: "pw".to_owned() };

    let posted: Result<LoginResponse, _> =
        poll_once(client.post_json(config::LOGIN_PATH, &request));
    assert_eq!(posted.unwrap_err(), HttpError::Network("not available on server".to_owned()));

    let fetched: Result<User, _> = poll_once(client.get_json("/api/v1/anything"));
    assert_eq!(fetched.unwrap_err(), HttpError::Network("not available on server".to_owned()));
}
