//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the configured HTTP client; `types` defines the wire DTOs
//! shared with the backend.

pub mod api;
pub mod types;
