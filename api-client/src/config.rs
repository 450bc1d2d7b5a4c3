//! # Client Configuration
//!
//! [`ApiConfig`] is passed to [`crate::ApiClient::new`] and fixed for the
//! lifetime of the client. It can be built in code or loaded from the
//! environment with [`ApiConfig::from_env()`]:
//!
//! - `API_BASE_URL`: backend origin (default `http://localhost:8080`)
//! - `API_STATUS_POLICY`: `strict` or `lenient` (default `strict`)
//! - `API_CREDENTIALS`: `include` or `omit` (default `include`)
//!
//! A `.env` file in the working directory is loaded first when present.

use std::env;
use std::str::FromStr;

use crate::core::error::{ApiError, Result};
use crate::utils::validation::validate_base_url;

/// Base origin used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// How non-success HTTP statuses are surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// A non-success status fails the call with [`ApiError::Status`].
    #[default]
    Strict,
    /// The body is decoded and returned whatever the status.
    ///
    /// Callers cannot tell an error payload from a success payload under
    /// this policy. Transport and decode failures are still errors.
    Lenient,
}

impl FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(StatusPolicy::Strict),
            "lenient" => Ok(StatusPolicy::Lenient),
            other => Err(format!("unknown status policy '{}' (expected strict or lenient)", other)),
        }
    }
}

/// Whether cookies for the backend origin travel with requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialMode {
    /// Send stored cookies and keep cookies set by responses.
    #[default]
    Include,
    /// Never send or store cookies.
    Omit,
}

impl FromStr for CredentialMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "include" => Ok(CredentialMode::Include),
            "omit" => Ok(CredentialMode::Omit),
            other => Err(format!("unknown credential mode '{}' (expected include or omit)", other)),
        }
    }
}

/// Backend API client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme, host, port (and optional path prefix) prepended to every request path
    pub base_url: String,

    /// Strict (error on non-success status) or lenient (return the body anyway)
    pub status_policy: StatusPolicy,

    /// Cookie passthrough for the backend origin
    pub credentials: CredentialMode,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            status_policy: StatusPolicy::default(),
            credentials: CredentialMode::default(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with default policies.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }

    pub fn with_credentials(mut self, credentials: CredentialMode) -> Self {
        self.credentials = credentials;
        self
    }

    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let config = Self::from_lookup(|name| env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let status_policy = match lookup("API_STATUS_POLICY") {
            Some(value) => value
                .parse()
                .map_err(|e| ApiError::Config(format!("API_STATUS_POLICY: {}", e)))?,
            None => StatusPolicy::default(),
        };

        let credentials = match lookup("API_CREDENTIALS") {
            Some(value) => value
                .parse()
                .map_err(|e| ApiError::Config(format!("API_CREDENTIALS: {}", e)))?,
            None => CredentialMode::default(),
        };

        Ok(Self {
            base_url,
            status_policy,
            credentials,
        })
    }

    /// Validate the base URL.
    pub fn validate(&self) -> Result<()> {
        let result = validate_base_url(&self.base_url);
        if result.is_valid {
            return Ok(());
        }
        Err(ApiError::Config(result.error.unwrap_or_default()))
    }

    /// Base URL without a trailing `/`, ready for `base + path`.
    pub fn normalized_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
