//! # Backend API Client - Library Root
//!
//! HTTP/JSON client used by the front end to talk to the backend API.
//! Every call composes `base + path`, performs one HTTP exchange and resolves
//! to decoded JSON or to a typed [`ApiError`].
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              api-client (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  Reqwest       - HTTP client + cookie jar              │
//! │  Tokio         - Async runtime                          │
//! │  Serde JSON    - Request/response bodies                │
//! │  Tracing       - Structured request logging             │
//! └────────────────────────────────────────────────────────┘
//!                           │
//!                           │ HTTP/JSON (+ cookies)
//!                           ▼
//!                 ┌───────────────────┐
//!                 │  Backend API      │
//!                 │  localhost:8080   │
//!                 └───────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **config**: [`ApiConfig`] with base origin, [`StatusPolicy`] and [`CredentialMode`]
//! - **core**: [`ApiError`], the `Result` alias and the [`ApiService`] trait
//! - **services**: `api` module with [`ApiClient`], request observers and auth endpoints
//! - **debug**: tracing subscriber setup
//! - **utils**: path and base URL validation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use api_client::{ApiClient, ApiConfig};
//! use serde_json::json;
//!
//! # async fn run() -> api_client::Result<()> {
//! let client = ApiClient::new(ApiConfig::default())?;
//!
//! let echoed = client.post("/login", &json!({ "user": "a", "pass": "b" })).await?;
//! let status = client.get("/status").await?;
//! # let _ = (echoed, status);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

pub use config::{ApiConfig, CredentialMode, StatusPolicy};
pub use crate::core::{ApiError, ApiService, Result};
pub use services::api::{ApiClient, RequestEvent, RequestObserver, TracingObserver};
