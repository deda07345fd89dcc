//! Session manager: restore, sign-in, sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "who is signed in". Bridges the persisted
//! user/token pair, the credential slot the HTTP client reads, and the
//! in-memory session state the screens render. Screens invoke the operations;
//! the app glue installs the results into `state::session::SessionState`.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures during `restore` and `sign_out` are logged and absorbed;
//! they must not block using the app. Failures while persisting a fresh
//! sign-in DO propagate: an authenticated-but-not-persisted session would
//! silently vanish on the next launch, so the caller is told instead and the
//! in-memory state stays signed out.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use leptos::logging::warn;

use super::credentials::Credentials;
use crate::net::api::AuthApi;
use crate::net::types::UserProfile;
use crate::storage::{KeyValueStore, StorageError, records};

/// Fallback shown when the backend gives no usable error message.
const SIGN_IN_FALLBACK: &str = "Unable to sign in. Try again later.";

/// Failure of a sign-in attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    /// The backend rejected the credentials or could not be reached.
    #[error("{0}")]
    Authentication(String),
    /// The session was created but could not be persisted locally.
    #[error("could not save the session: {0}")]
    Persistence(#[from] StorageError),
}

impl SignInError {
    /// User-displayable message for banners.
    #[must_use]
    pub fn display_message(&self) -> String {
        self.to_string()
    }
}

/// Owns the session lifecycle over a key-value store and the credential slot.
#[derive(Clone)]
pub struct SessionManager<S> {
    store: S,
    credentials: Credentials,
}

impl<S: KeyValueStore> SessionManager<S> {
    #[must_use]
    pub fn new(store: S, credentials: Credentials) -> Self {
        Self { store, credentials }
    }

    /// Recover a previously persisted session.
    ///
    /// Returns the stored user and installs its token in the credential slot
    /// when both records are present. A half-present pair counts as no
    /// session and the leftover record is dropped. Storage failures leave
    /// the session signed out; they are logged, never fatal.
    pub fn restore(&self) -> Option<UserProfile> {
        let user = match records::load_user(&self.store) {
            Ok(user) => user,
            Err(e) => {
                warn!("session restore failed reading user record: {e}");
                return None;
            }
        };
        let token = match records::load_token(&self.store) {
            Ok(token) => token,
            Err(e) => {
                warn!("session restore failed reading token record: {e}");
                return None;
            }
        };

        match (user, token) {
            (Some(user), Some(token)) => {
                self.credentials.set(&token);
                Some(user)
            }
            (None, None) => None,
            (user, token) => {
                warn!("inconsistent session records, clearing leftovers");
                if user.is_some() {
                    if let Err(e) = records::remove_user(&self.store) {
                        warn!("failed clearing user record: {e}");
                    }
                }
                if token.is_some() {
                    if let Err(e) = records::remove_token(&self.store) {
                        warn!("failed clearing token record: {e}");
                    }
                }
                None
            }
        }
    }

    /// Exchange credentials for a session and persist it.
    ///
    /// Persists the user record, then the token record, then installs the
    /// token in the credential slot; the pair is never left half-written.
    ///
    /// # Errors
    ///
    /// [`SignInError::Authentication`] when the backend rejects the attempt
    /// or cannot be reached; [`SignInError::Persistence`] when the session
    /// was created but could not be stored. Nothing is kept in memory on the
    /// persistence path either, so the next launch matches what is stored.
    pub async fn sign_in(
        &self,
        api: &impl AuthApi,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, SignInError> {
        let session = api
            .create_session(email, password)
            .await
            .map_err(|e| SignInError::Authentication(e.display_message(SIGN_IN_FALLBACK)))?;

        records::save_user(&self.store, &session.user)?;
        if let Err(e) = records::save_token(&self.store, &session.token) {
            // Keep the pair invariant: no user record without a token record.
            if let Err(cleanup) = records::remove_user(&self.store) {
                warn!("failed rolling back user record: {cleanup}");
            }
            return Err(SignInError::Persistence(e));
        }

        self.credentials.set(&session.token);
        Ok(session.user)
    }

    /// Locally end the session.
    ///
    /// Always succeeds from the caller's point of view: the credential slot
    /// is cleared first and storage removal failures are only logged.
    pub fn sign_out(&self) {
        self.credentials.clear();
        if let Err(e) = records::remove_user(&self.store) {
            warn!("sign-out failed removing user record: {e}");
        }
        if let Err(e) = records::remove_token(&self.store) {
            warn!("sign-out failed removing token record: {e}");
        }
    }
}
