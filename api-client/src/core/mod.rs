//! # Core Abstractions
//!
//! Error types and service traits shared by the rest of the crate.
//!
//! - **[`error`]**: [`ApiError`] and the `Result<T>` alias
//! - **[`service`]**: [`ApiService`] for dependency injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use api_client::{ApiClient, ApiConfig, ApiService};
//!
//! # fn build() -> api_client::Result<()> {
//! // In production: the real client
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(ApiConfig::default())?);
//! # let _ = api;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, Result};
pub use service::ApiService;
