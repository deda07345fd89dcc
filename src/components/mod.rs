//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render screen chrome and list rows while reading shared state
//! from Leptos context providers; pages own the orchestration.

pub mod exercise_card;
pub mod group_chip;
pub mod history_card;
pub mod home_header;
pub mod screen_header;
pub mod tab_bar;
