//! Session state for the current signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate sign-in
//! redirects and identity-dependent rendering. Written only by the app glue
//! around the session-manager operations.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserProfile;

/// Session state tracking the current user and the startup restore.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// The signed-in user, if any.
    pub user: Option<UserProfile>,
    /// True only while the startup restore attempt is in flight.
    pub restoring: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, restoring: true }
    }
}

impl SessionState {
    /// Install the outcome of the startup restore attempt.
    ///
    /// Clears `restoring` on every path, success or not.
    pub fn finish_restore(&mut self, user: Option<UserProfile>) {
        self.user = user;
        self.restoring = false;
    }

    /// Install a freshly signed-in user.
    pub fn set_user(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    /// Drop the signed-in user. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.user = None;
    }

    /// Whether a user is currently signed in.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
