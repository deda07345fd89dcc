//! Typed record helpers for the persisted user/token pair.
//!
//! The two records are always written and removed together; a half-present
//! pair is treated as no session by the restore path.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use super::{KeyValueStore, StorageError, TOKEN_KEY, USER_KEY};
use crate::net::types::UserProfile;

/// Persist the user profile record as JSON.
pub fn save_user<S: KeyValueStore>(store: &S, user: &UserProfile) -> Result<(), StorageError> {
    let raw = serde_json::to_string(user).map_err(|e| StorageError::Serde(e.to_string()))?;
    store.set(USER_KEY, &raw)
}

/// Load the user profile record, if present.
pub fn load_user<S: KeyValueStore>(store: &S) -> Result<Option<UserProfile>, StorageError> {
    let Some(raw) = store.get(USER_KEY)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Serde(e.to_string()))
}

/// Remove the user profile record.
pub fn remove_user<S: KeyValueStore>(store: &S) -> Result<(), StorageError> {
    store.remove(USER_KEY)
}

/// Persist the auth token record.
pub fn save_token<S: KeyValueStore>(store: &S, token: &str) -> Result<(), StorageError> {
    store.set(TOKEN_KEY, token)
}

/// Load the auth token record, if present.
pub fn load_token<S: KeyValueStore>(store: &S) -> Result<Option<String>, StorageError> {
    store.get(TOKEN_KEY)
}

/// Remove the auth token record.
pub fn remove_token<S: KeyValueStore>(store: &S) -> Result<(), StorageError> {
    store.remove(TOKEN_KEY)
}
