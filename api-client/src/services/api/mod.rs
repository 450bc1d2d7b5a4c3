//! # Backend API Client Module
//!
//! HTTP client for communicating with the backend API server.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - ApiClient struct, post/get and the shared dispatch path
//! ├── observer.rs  - RequestObserver hook and the default TracingObserver
//! └── auth.rs      - User management endpoints (register, login)
//! ```

pub mod auth;
pub mod client;
pub mod observer;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
pub use observer::{RequestEvent, RequestObserver, TracingObserver};
