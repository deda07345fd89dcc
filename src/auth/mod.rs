//! Session lifecycle: credentials, restore, sign-in, sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager is the single writer of the credential slot and of the
//! persisted user/token pair; screens reach it through Leptos context and
//! install its results into the shared session state.

pub mod credentials;
pub mod manager;
