//! # Client Error Types
//!
//! [`ApiError`] covers every way a call can fail, so callers can tell
//! "the server answered with an error payload" apart from "no response"
//! and "the response was not JSON".
//!
//! ## Error Categories
//!
//! - **InvalidPath / Config**: rejected before any request is issued
//! - **Encode**: the request body could not be serialized
//! - **Transport**: no HTTP status was received, or the body could not be read
//! - **Status**: non-success status under [`crate::StatusPolicy::Strict`]
//! - **Decode**: the body was not valid JSON for the requested type
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use api_client::{ApiClient, ApiConfig, ApiError};
//!
//! # async fn run(client: ApiClient) {
//! match client.get("/status").await {
//!     Ok(body) => println!("{body}"),
//!     Err(ApiError::Status { status, .. }) => eprintln!("server said {status}"),
//!     Err(e) if e.is_transport() => eprintln!("backend unreachable: {e}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```

use reqwest::StatusCode;
use serde_json::Value;
use shared::ErrorResponse;
use thiserror::Error;

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request path does not begin with `/` or cannot form a URL.
    #[error("Invalid request path: {0}")]
    InvalidPath(String),

    /// Client configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Connection refused, DNS failure, reset, or body read failure.
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-success HTTP status (strict policy).
    ///
    /// `body` holds the decoded payload when the server sent JSON.
    #[error("HTTP {}", .status.as_u16())]
    Status {
        status: StatusCode,
        body: Option<Value>,
    },

    /// Response body is not valid JSON for the requested type.
    #[error("Failed to parse response (HTTP {}): {source}", .status.as_u16())]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status attached to the error, if a response was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } | ApiError::Decode { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// True when no HTTP response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// The server's [`ErrorResponse`], when a failure status carried one.
    pub fn error_response(&self) -> Option<ErrorResponse> {
        match self {
            ApiError::Status {
                body: Some(body), ..
            } => serde_json::from_value(body.clone()).ok(),
            _ => None,
        }
    }

    /// User-facing message.
    ///
    /// For a failure status carrying `{"error": "..."}` this is the server's
    /// error string; otherwise the `Display` text.
    pub fn message(&self) -> String {
        match self.error_response() {
            Some(response) => response.error,
            None => self.to_string(),
        }
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
