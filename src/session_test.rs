use super::*;

fn user(id: i64) -> User {
    User { id, email: None, name: None }
}

// =============================================================
// Empty store
// =============================================================

#[test]
fn empty_store_has_no_session() {
    let store = SessionStore::in_memory();
    assert!(store.token().is_none());
    assert!(store.user().is_none());
    assert_eq!(store.snapshot(), Session::default());
}

#[test]
fn browser_store_falls_back_to_memory_off_wasm() {
    // Without a browser environment the store must still be constructible
    // and behave like an empty in-memory store.
    let store = SessionStore::browser();
    assert!(store.token().is_none());
}

// =============================================================
// Store / clear round-trip
// =============================================================

#[test]
fn store_persists_token_and_user() {
    let store = SessionStore::in_memory();
    store.store("abc", &user(1));

    assert_eq!(store.token().as_deref(), Some("abc"));
    assert_eq!(store.user(), Some(user(1)));
}

#[test]
fn user_is_persisted_as_minimal_json() {
    let store = SessionStore::in_memory();
    store.store("abc", &user(1));

    assert_eq!(store.get(USER_KEY).as_deref(), Some(r#"{"id":1}"#));
}

#[test]
fn clear_removes_both_keys() {
    let store = SessionStore::in_memory();
    store.store("abc", &user(1));
    store.clear();

    assert!(store.get(TOKEN_KEY).is_none());
    assert!(store.get(USER_KEY).is_none());
    assert_eq!(store.snapshot(), Session::default());
}

#[test]
fn clones_share_the_same_backend() {
    let store = SessionStore::in_memory();
    let other = store.clone();
    store.store("abc", &user(1));

    assert_eq!(other.token().as_deref(), Some("abc"));
}

// =============================================================
// Rehydration edge cases
// =============================================================

#[test]
fn malformed_persisted_user_is_discarded() {
    let store = SessionStore::in_memory();
    store.set(TOKEN_KEY, "abc");
    store.set(USER_KEY, "not json");

    let snapshot = store.snapshot();
    assert_eq!(snapshot.token.as_deref(), Some("abc"));
    assert!(snapshot.user.is_none());
}

#[test]
fn snapshot_round_trips_full_session() {
    let store = SessionStore::in_memory();
    let record = User { id: 7, email: Some("u@example.com".to_owned()), name: Some("U".to_owned()) };
    store.store("tok", &record);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.token.as_deref(), Some("tok"));
    assert_eq!(snapshot.user, Some(record));
}
