//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the front end and the backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Registration and login DTOs
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication
//!
//! ## Usage in the Front End
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, ApiMessage};
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let request = LoginRequest {
//!     email: "alice@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: ApiMessage = reqwest::Client::new()
//!     .post("http://localhost:8080/api/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;

// Wildcard re-export: shared is a DTO library, everything in it is public API
pub use dto::*;
