//! # Request Observers
//!
//! Hook invoked by [`super::ApiClient`] after every exchange. The default
//! [`TracingObserver`] writes one structured log line per call; tests inject
//! their own observer to assert on call patterns.

use std::time::Duration;

use reqwest::{Method, StatusCode};

/// One completed HTTP exchange (a status was received).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEvent {
    pub method: Method,
    pub path: String,
    pub status: StatusCode,
    /// Reason phrase from the status line, or the canonical one; empty when unknown
    pub status_text: String,
    /// Time from send until response headers arrived
    pub elapsed: Duration,
}

/// Observability hook for API calls.
pub trait RequestObserver: Send + Sync {
    /// Called once per call that received an HTTP status, before the body is decoded.
    fn on_response(&self, event: &RequestEvent);

    /// Called when no response was received.
    fn on_transport_error(&self, _method: &Method, _path: &str, _error: &reqwest::Error) {}
}

/// Logs every call through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_response(&self, event: &RequestEvent) {
        let duration_ms = event.elapsed.as_millis() as u64;
        if event.status.is_success() {
            tracing::info!(
                method = %event.method,
                path = %event.path,
                status = event.status.as_u16(),
                status_text = %event.status_text,
                duration_ms,
                "API call completed"
            );
        } else {
            tracing::warn!(
                method = %event.method,
                path = %event.path,
                status = event.status.as_u16(),
                status_text = %event.status_text,
                duration_ms,
                "API call returned failure status"
            );
        }
    }

    fn on_transport_error(&self, method: &Method, path: &str, error: &reqwest::Error) {
        tracing::error!(method = %method, path, error = %error, "API call network error");
    }
}
