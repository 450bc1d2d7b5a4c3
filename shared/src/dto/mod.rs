//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the front end and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, login, and the generic message/error bodies
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/login
//! Content-Type: application/json
//!
//! {
//!   "email": "alice@example.com",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Set-Cookie: token=...; HttpOnly; Path=/; SameSite=Strict
//! Content-Type: application/json
//!
//! {"success":true, "message":"Login successful"}
//! ```
//!
//! Every failure status carries an [`auth::ErrorResponse`] body:
//!
//! ```text
//! HTTP/1.1 400 Bad Request
//! Content-Type: application/json
//!
//! {"error":"Invalid credentials"}
//! ```

pub mod auth;

pub use auth::*;
