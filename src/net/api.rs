//! REST API client for the LiftLog backend.
//!
//! Browser (`web`): real HTTP calls via `gloo-net`, attaching the bearer
//! header from the shared credential slot on every request.
//! Host: stubs returning `ApiError::Network` so state and session logic
//! compiles and tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses are decoded into the backend's `{message}` payload
//! when possible; callers derive user-facing text with
//! [`ApiError::display_message`] and a screen-specific fallback.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Exercise, HistoryDay, SessionResponse};
use crate::auth::credentials::Credentials;
#[cfg(feature = "web")]
use serde::de::DeserializeOwned;

/// Default backend address, matching the development server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3333";

/// Failure of a backend request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// User-displayable message: the backend-provided text when present,
    /// otherwise `fallback`.
    #[must_use]
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(m), .. } => m.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Backend session-creation seam, faked in session-manager tests.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange sign-in credentials for a user + token pair via
    /// `POST /sessions`.
    async fn create_session(&self, email: &str, password: &str)
    -> Result<SessionResponse, ApiError>;
}

#[cfg(any(test, feature = "web"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "web"))]
fn exercises_by_group_endpoint(group: &str) -> String {
    format!("/exercises/bygroup/{group}")
}

#[cfg(any(test, feature = "web"))]
fn exercise_endpoint(id: &str) -> String {
    format!("/exercises/{id}")
}

#[cfg(any(test, feature = "web"))]
fn error_from_parts(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<super::types::ErrorBody>(body)
        .ok()
        .map(|b| b.message);
    ApiError::Status { status, message }
}

#[cfg(feature = "web")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    error_from_parts(status, &body)
}

#[cfg(not(feature = "web"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

/// Configured HTTP client: base URL plus the shared credential slot.
///
/// Cheap to clone; all clones read the same credential slot.
#[derive(Clone, Debug)]
pub struct Api {
    base_url: String,
    credentials: Credentials,
}

impl Api {
    #[must_use]
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            credentials,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Absolute URL of an exercise demo animation.
    #[must_use]
    pub fn demo_url(&self, file: &str) -> String {
        self.url(&format!("/exercise/demo/{file}"))
    }

    /// Absolute URL of an exercise thumbnail.
    #[must_use]
    pub fn thumb_url(&self, file: &str) -> String {
        self.url(&format!("/exercise/thumb/{file}"))
    }

    /// Absolute URL of a user avatar image.
    #[must_use]
    pub fn avatar_url(&self, file: &str) -> String {
        self.url(&format!("/avatar/{file}"))
    }

    #[cfg(feature = "web")]
    fn authorized(&self, req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.credentials.get() {
            Some(token) => req.header("Authorization", &bearer_value(&token)),
            None => req,
        }
    }

    #[cfg(feature = "web")]
    async fn read_json<T: DeserializeOwned>(
        resp: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(feature = "web")]
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self
            .authorized(gloo_net::http::Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(resp).await
    }

    #[cfg(feature = "web")]
    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ApiError> {
        let resp = self
            .authorized(gloo_net::http::Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(resp).await
    }

    #[cfg(feature = "web")]
    async fn post_unit(&self, path: &str, body: &serde_json::Value) -> Result<(), ApiError> {
        let resp = self
            .authorized(gloo_net::http::Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(error_from_response(resp).await)
        }
    }

    /// Register a new account via `POST /users`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the backend rejects the registration or
    /// cannot be reached.
    pub async fn create_account(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "web")]
        {
            self.post_unit(
                "/users",
                &serde_json::json!({ "name": name, "email": email, "password": password }),
            )
            .await
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (name, email, password);
            Err(unavailable())
        }
    }

    /// List muscle groups via `GET /groups`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn fetch_groups(&self) -> Result<Vec<String>, ApiError> {
        #[cfg(feature = "web")]
        {
            self.get_json("/groups").await
        }
        #[cfg(not(feature = "web"))]
        {
            Err(unavailable())
        }
    }

    /// List the exercises of one muscle group via
    /// `GET /exercises/bygroup/:group`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn fetch_exercises_by_group(&self, group: &str) -> Result<Vec<Exercise>, ApiError> {
        #[cfg(feature = "web")]
        {
            self.get_json(&exercises_by_group_endpoint(group)).await
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = group;
            Err(unavailable())
        }
    }

    /// Fetch one exercise's detail via `GET /exercises/:id`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn fetch_exercise(&self, id: &str) -> Result<Exercise, ApiError> {
        #[cfg(feature = "web")]
        {
            self.get_json(&exercise_endpoint(id)).await
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = id;
            Err(unavailable())
        }
    }

    /// Record a completed exercise via `POST /history`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn record_exercise(&self, exercise_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "web")]
        {
            self.post_unit("/history", &serde_json::json!({ "exercise_id": exercise_id }))
                .await
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = exercise_id;
            Err(unavailable())
        }
    }

    /// Fetch the workout history, grouped by day, via `GET /history`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn fetch_history(&self) -> Result<Vec<HistoryDay>, ApiError> {
        #[cfg(feature = "web")]
        {
            self.get_json("/history").await
        }
        #[cfg(not(feature = "web"))]
        {
            Err(unavailable())
        }
    }
}

impl AuthApi for Api {
    async fn create_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionResponse, ApiError> {
        #[cfg(feature = "web")]
        {
            self.post_json(
                "/sessions",
                &serde_json::json!({ "email": email, "password": password }),
            )
            .await
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (email, password);
            Err(unavailable())
        }
    }
}
