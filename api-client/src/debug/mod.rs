//! # Logging Infrastructure
//!
//! Structured logging for the API client via `tracing`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use api_client::debug::{self, DebugConfig};
//!
//! // Initialize at app startup, keep the guard alive
//! let _guard = debug::init(&DebugConfig::from_env()).expect("logging init");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `api_client=info,warn`)
//! - `API_CLIENT_LOG_DIR`: Enable the daily-rotated file log in this directory
//! - `API_CLIENT_LOG_ANSI`: Set to `0` to disable colors on stderr

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::{init, LoggerError};
