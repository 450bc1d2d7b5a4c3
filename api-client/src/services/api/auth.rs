//! # User Management Endpoints
//!
//! Registration and login against the backend's `/api/register` and
//! `/api/login` routes. Both are strict regardless of the client's
//! [`StatusPolicy`]: a failure status always comes back as
//! [`ApiError::Status`] with the server's `{"error": ...}` payload.

use reqwest::Method;
use shared::{ApiMessage, LoginRequest, RegisterRequest};

use super::client::ApiClient;
use crate::config::StatusPolicy;
use crate::core::error::{ApiError, Result};

pub const REGISTER_PATH: &str = "/api/register";
pub const LOGIN_PATH: &str = "/api/login";

/// Register a new user.
#[tracing::instrument(skip(client, request), fields(username = %request.username))]
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<ApiMessage> {
    tracing::info!("Attempting registration");

    let body = serde_json::to_vec(request).map_err(ApiError::Encode)?;
    let result = client
        .dispatch::<ApiMessage>(Method::POST, REGISTER_PATH, Some(body), StatusPolicy::Strict)
        .await;

    match &result {
        Ok(message) => tracing::info!(server_message = %message.message, "Registration successful"),
        Err(e) => tracing::warn!(status = ?e.status(), error = %e.message(), "Registration failed"),
    }
    result
}

/// Login with email and password.
///
/// On success the backend sets a `token` cookie; with
/// [`crate::CredentialMode::Include`] it is replayed on later calls.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<ApiMessage> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let body = serde_json::to_vec(request).map_err(ApiError::Encode)?;
    let result = client
        .dispatch::<ApiMessage>(Method::POST, LOGIN_PATH, Some(body), StatusPolicy::Strict)
        .await;

    let duration = start.elapsed();
    match &result {
        Ok(_) => tracing::info!(duration_ms = duration.as_millis() as u64, "Login successful"),
        Err(e) => tracing::warn!(
            status = ?e.status(),
            error = %e.message(),
            duration_ms = duration.as_millis() as u64,
            "Login failed"
        ),
    }
    result
}
