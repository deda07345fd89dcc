//! Persistent key-value storage for the session records.
//!
//! DESIGN
//! ======
//! A small `KeyValueStore` trait hides the browser `localStorage` backend so
//! session logic can run against an in-memory store in host tests. Typed
//! helpers in `records` keep the user/token pair serialization in one place.

pub mod local;
pub mod memory;
pub mod records;

/// Storage key for the serialized user profile record.
pub const USER_KEY: &str = "liftlog_user";

/// Storage key for the auth token record.
pub const TOKEN_KEY: &str = "liftlog_token";

/// Failure raised by a key-value store or record (de)serialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is available in this environment.
    #[error("persistent storage is not available")]
    Unavailable,
    /// The backend rejected the operation.
    #[error("storage operation failed: {0}")]
    Backend(String),
    /// A stored record could not be encoded or decoded.
    #[error("invalid stored record: {0}")]
    Serde(String),
}

/// Minimal key-value contract over device-local storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
