//! Shared credential slot read by the HTTP client.
//!
//! DESIGN
//! ======
//! The bearer token lives in one cloneable slot injected into the `Api` at
//! construction instead of a mutable default-header map. The session manager
//! is the sole writer; request paths only read.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to the current bearer token, if any.
#[derive(Clone, Debug, Default)]
pub struct Credentials {
    token: Arc<Mutex<Option<String>>>,
}

impl Credentials {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current token, if one is installed.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.slot().clone()
    }

    /// Install `token` for subsequent requests.
    pub fn set(&self, token: &str) {
        *self.slot() = Some(token.to_owned());
    }

    /// Drop the installed token.
    pub fn clear(&self) {
        *self.slot() = None;
    }

    /// Whether a token is installed.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.slot().is_some()
    }
}
