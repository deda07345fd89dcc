//! Browser `localStorage` implementation of the key-value store.
//!
//! Browser (`web`): real storage on `window.localStorage`.
//! Host: inert stub returning `StorageError::Unavailable` so the crate
//! compiles and tests without a browser environment.

use super::{KeyValueStore, StorageError};

/// `localStorage`-backed store.
///
/// Zero-sized; the storage object is resolved per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[cfg(feature = "web")]
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "web")]
        {
            Self::storage()?
                .get_item(key)
                .map_err(|e| StorageError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "web")]
        {
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "web")]
        {
            Self::storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}
