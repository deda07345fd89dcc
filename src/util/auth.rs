//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Whether a route that requires a session should bounce to `/signin`.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.restoring && state.user.is_none()
}

/// Redirect to `/signin` whenever the restore has settled with no user.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/signin", NavigateOptions::default());
        }
    });
}
