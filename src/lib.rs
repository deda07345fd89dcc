//! # liftlog
//!
//! Leptos + WASM client for the LiftLog workout-tracking backend.
//!
//! Every screen is a thin view over the REST API: sign in/up, muscle groups
//! and exercises, exercise detail, recording completed exercises, and the
//! workout history. The signed-in user and the session token are persisted in
//! browser storage and restored once at startup.
//!
//! Browser-only code is gated behind the `web` cargo feature with inert stubs
//! otherwise, so session, storage, and state logic compiles and tests on the
//! host toolchain.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;
