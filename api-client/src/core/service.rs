//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use serde_json::Value;
use shared::{ApiMessage, LoginRequest, RegisterRequest};

use crate::core::error::Result;

/// Trait for API service operations
///
/// Callers hold `Arc<dyn ApiService>` so tests can swap in a double for
/// [`crate::ApiClient`].
#[async_trait]
pub trait ApiService: Send + Sync {
    /// POST a JSON body and decode the JSON response
    async fn post_json(&self, path: &str, data: Value) -> Result<Value>;

    /// GET and decode the JSON response
    async fn get_json(&self, path: &str) -> Result<Value>;

    /// Register a new user
    async fn register(&self, request: RegisterRequest) -> Result<ApiMessage>;

    /// Log in; the session cookie is retained when credentials are included
    async fn login(&self, request: LoginRequest) -> Result<ApiMessage>;
}
