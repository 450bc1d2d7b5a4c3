//! # Services Module
//!
//! External service integrations. Currently a single one: the backend HTTP API.
//!
//! ```text
//! ┌──────────────────────────┐
//! │        Front end         │
//! │  ┌────────────────────┐  │
//! │  │  ApiClient         │  │
//! │  │  (api/client.rs)   │  │
//! │  └─────────┬──────────┘  │
//! └────────────┼─────────────┘
//!              │ HTTP/JSON + cookies
//!              ▼
//! ┌──────────────────────────┐
//! │  Backend API Server      │
//! │  /api/register           │
//! │  /api/login              │
//! │  ...                     │
//! └──────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every call returns `Result<T, ApiError>`:
//! - Network errors: `ApiError::Transport`
//! - Failure statuses (strict policy): `ApiError::Status` with the decoded error body
//! - Non-JSON bodies: `ApiError::Decode`
//!
//! ## Thread Safety
//!
//! `ApiClient` wraps `reqwest::Client` and an `Arc`'d cookie jar; clone it
//! into as many tasks as needed. Completion order of concurrent calls is
//! not related to issue order.

pub mod api;
