use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::net::types::SessionResponse;
use crate::storage::memory::MemoryStore;
use crate::storage::{TOKEN_KEY, USER_KEY};

fn ana() -> UserProfile {
    UserProfile {
        id: "1".to_owned(),
        name: "Ana".to_owned(),
        email: "a@b.com".to_owned(),
        avatar: None,
    }
}

fn session_response() -> SessionResponse {
    SessionResponse { user: ana(), token: "tok123".to_owned() }
}

/// Stub backend answering `POST /sessions` from a canned result.
struct StubAuth(Result<SessionResponse, ApiError>);

impl AuthApi for StubAuth {
    async fn create_session(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<SessionResponse, ApiError> {
        self.0.clone()
    }
}

/// Store wrapper that rejects writes to one key.
struct FailingStore {
    inner: MemoryStore,
    fail_key: &'static str,
}

impl FailingStore {
    fn new(fail_key: &'static str) -> Self {
        Self { inner: MemoryStore::new(), fail_key }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.fail_key {
            return Err(StorageError::Backend("quota exceeded".to_owned()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

/// Store that rejects every operation.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[test]
fn restore_with_both_records_installs_session() {
    let store = MemoryStore::new();
    records::save_user(&store, &ana()).unwrap();
    records::save_token(&store, "tok123").unwrap();

    let credentials = Credentials::new();
    let manager = SessionManager::new(&store, credentials.clone());

    assert_eq!(manager.restore(), Some(ana()));
    assert_eq!(credentials.get().as_deref(), Some("tok123"));
}

#[test]
fn restore_with_empty_store_stays_signed_out() {
    let store = MemoryStore::new();
    let credentials = Credentials::new();
    let manager = SessionManager::new(&store, credentials.clone());

    assert_eq!(manager.restore(), None);
    assert!(!credentials.is_set());
}

#[test]
fn restore_with_token_only_clears_the_leftover() {
    let store = MemoryStore::new();
    records::save_token(&store, "tok123").unwrap();

    let credentials = Credentials::new();
    let manager = SessionManager::new(&store, credentials.clone());

    assert_eq!(manager.restore(), None);
    assert!(!credentials.is_set());
    assert!(store.is_empty());
}

#[test]
fn restore_with_user_only_clears_the_leftover() {
    let store = MemoryStore::new();
    records::save_user(&store, &ana()).unwrap();

    let credentials = Credentials::new();
    let manager = SessionManager::new(&store, credentials.clone());

    assert_eq!(manager.restore(), None);
    assert!(!credentials.is_set());
    assert!(store.is_empty());
}

#[test]
fn restore_swallows_storage_failures() {
    let credentials = Credentials::new();
    let manager = SessionManager::new(BrokenStore, credentials.clone());

    assert_eq!(manager.restore(), None);
    assert!(!credentials.is_set());
}

#[test]
fn sign_in_persists_pair_then_installs_token() {
    let store = MemoryStore::new();
    let credentials = Credentials::new();
    let manager = SessionManager::new(&store, credentials.clone());
    let api = StubAuth(Ok(session_response()));

    let user = block_on(manager.sign_in(&api, "a@b.com", "secret")).unwrap();

    assert_eq!(user, ana());
    assert_eq!(records::load_user(&store).unwrap(), Some(ana()));
    assert_eq!(records::load_token(&store).unwrap().as_deref(), Some("tok123"));
    assert_eq!(credentials.get().as_deref(), Some("tok123"));
}

#[test]
fn sign_in_rejection_keeps_everything_untouched() {
    let store = MemoryStore::new();
    let credentials = Credentials::new();
    let manager = SessionManager::new(&store, credentials.clone());
    let api = StubAuth(Err(ApiError::Status {
        status: 401,
        message: Some("E-mail and/or password incorrect.".to_owned()),
    }));

    let err = block_on(manager.sign_in(&api, "a@b.com", "nope")).unwrap_err();

    assert_eq!(
        err,
        SignInError::Authentication("E-mail and/or password incorrect.".to_owned())
    );
    assert!(store.is_empty());
    assert!(!credentials.is_set());
}

#[test]
fn sign_in_transport_failure_uses_generic_message() {
    let store = MemoryStore::new();
    let manager = SessionManager::new(&store, Credentials::new());
    let api = StubAuth(Err(ApiError::Network("timeout".to_owned())));

    let err = block_on(manager.sign_in(&api, "a@b.com", "secret")).unwrap_err();

    assert_eq!(
        err,
        SignInError::Authentication("Unable to sign in. Try again later.".to_owned())
    );
}

#[test]
fn sign_in_user_persist_failure_propagates() {
    let store = FailingStore::new(USER_KEY);
    let credentials = Credentials::new();
    let manager = SessionManager::new(&store, credentials.clone());
    let api = StubAuth(Ok(session_response()));

    let err = block_on(manager.sign_in(&api, "a@b.com", "secret")).unwrap_err();

    assert!(matches!(err, SignInError::Persistence(_)));
    assert!(store.inner.is_empty());
    assert!(!credentials.is_set());
}

#[test]
fn sign_in_token_persist_failure_rolls_back_user_record() {
    let store = FailingStore::new(TOKEN_KEY);
    let credentials = Credentials::new();
    let manager = SessionManager::new(&store, credentials.clone());
    let api = StubAuth(Ok(session_response()));

    let err = block_on(manager.sign_in(&api, "a@b.com", "secret")).unwrap_err();

    assert!(matches!(err, SignInError::Persistence(_)));
    assert!(store.inner.is_empty());
    assert!(!credentials.is_set());
}

#[test]
fn sign_out_removes_pair_and_credential() {
    let store = MemoryStore::new();
    let credentials = Credentials::new();
    let manager = SessionManager::new(&store, credentials.clone());
    let api = StubAuth(Ok(session_response()));
    block_on(manager.sign_in(&api, "a@b.com", "secret")).unwrap();

    manager.sign_out();

    assert!(store.is_empty());
    assert!(!credentials.is_set());
    assert_eq!(manager.restore(), None);
}

#[test]
fn sign_out_twice_matches_sign_out_once() {
    let store = MemoryStore::new();
    let credentials = Credentials::new();
    let manager = SessionManager::new(&store, credentials.clone());
    let api = StubAuth(Ok(session_response()));
    block_on(manager.sign_in(&api, "a@b.com", "secret")).unwrap();

    manager.sign_out();
    manager.sign_out();

    assert!(store.is_empty());
    assert!(!credentials.is_set());
}

#[test]
fn sign_out_with_broken_store_still_clears_credential() {
    let credentials = Credentials::new();
    credentials.set("tok123");
    let manager = SessionManager::new(BrokenStore, credentials.clone());

    manager.sign_out();

    assert!(!credentials.is_set());
}
