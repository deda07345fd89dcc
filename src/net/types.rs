//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend payloads so serde round-trips stay
//! lossless; screens render them directly without an intermediate view model.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user's profile.
///
/// Replaced wholesale on sign-in and sign-out, never mutated field by field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Avatar image file name served by the backend, if set.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Success payload of `POST /sessions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: UserProfile,
    pub token: String,
}

/// An exercise as listed and detailed by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    /// Muscle group this exercise belongs to.
    pub group: String,
    /// Series in the suggested routine.
    pub series: u32,
    /// Repetitions per series; the backend sends this as text.
    pub repetitions: String,
    /// Demo animation file name (`GET /exercise/demo/:file`).
    pub demo: String,
    /// Thumbnail file name (`GET /exercise/thumb/:file`).
    pub thumb: String,
}

/// One recorded exercise inside a history section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub name: String,
    pub group: String,
    /// Wall-clock time the exercise was recorded (e.g. `"08:12"`).
    pub hour: String,
    pub created_at: String,
}

/// History entries for one calendar day, as grouped by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryDay {
    /// Section heading (e.g. `"22.07.24"`).
    pub title: String,
    pub data: Vec<HistoryEntry>,
}

/// Error payload the backend attaches to non-success responses.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
