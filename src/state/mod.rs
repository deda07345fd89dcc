//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is a plain struct held in a Leptos `RwSignal` provided via context,
//! so transitions stay testable on the host without a reactive runtime.

pub mod session;
