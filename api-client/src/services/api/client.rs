//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::{ApiMessage, LoginRequest, RegisterRequest};

use super::observer::{RequestEvent, RequestObserver, TracingObserver};
use crate::config::{ApiConfig, CredentialMode, StatusPolicy};
use crate::core::error::{ApiError, Result};
use crate::core::service::ApiService;
use crate::utils::validation::validate_path;

/// HTTP client for communicating with the backend API server.
///
/// Cloning is cheap: the connection pool, cookie jar and observer are shared,
/// so clones can be moved into concurrent tasks.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    config: ApiConfig,
    jar: Arc<Jar>,
    observer: Arc<dyn RequestObserver>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the backend described by `config`.
    ///
    /// No request timeout is set; calls are bounded only by the OS network stack.
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            jar: Arc::new(Jar::default()),
            observer: Arc::new(TracingObserver),
        })
    }

    /// Replace the default [`TracingObserver`].
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        self.config.normalized_base()
    }

    /// Full request URL for `path` (`base + path`).
    pub fn url_for(&self, path: &str) -> Result<Url> {
        let check = validate_path(path);
        if !check.is_valid {
            return Err(ApiError::InvalidPath(check.error.unwrap_or_default()));
        }

        Url::parse(&format!("{}{}", self.base_url(), path))
            .map_err(|e| ApiError::InvalidPath(format!("{}: {}", path, e)))
    }

    /// POST `data` as JSON to `base + path` and decode the JSON response.
    pub async fn post<T>(&self, path: &str, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        self.post_as(path, data).await
    }

    /// Like [`ApiClient::post`], decoding into `R`.
    pub async fn post_as<T, R>(&self, path: &str, data: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(data).map_err(ApiError::Encode)?;
        self.dispatch(Method::POST, path, Some(body), self.config.status_policy)
            .await
    }

    /// GET `base + path` and decode the JSON response.
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.get_as(path).await
    }

    /// Like [`ApiClient::get`], decoding into `R`.
    pub async fn get_as<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.dispatch(Method::GET, path, None, self.config.status_policy)
            .await
    }

    /// Perform one exchange and decode the body according to `policy`.
    pub(crate) async fn dispatch<R>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        policy: StatusPolicy,
    ) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.url_for(path)?;
        let credentialed = self.config.credentials == CredentialMode::Include;

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }
        if credentialed {
            if let Some(cookies) = self.jar.cookies(&url) {
                request = request.header(COOKIE, cookies);
            }
        }

        let start = Instant::now();
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                self.observer.on_transport_error(&method, path, &e);
                return Err(ApiError::Transport(e));
            }
        };

        let status = response.status();
        if credentialed {
            let mut set_cookies = response.headers().get_all(SET_COOKIE).iter();
            self.jar.set_cookies(&mut set_cookies, &url);
        }

        self.observer.on_response(&RequestEvent {
            method,
            path: path.to_string(),
            status,
            status_text: status_text(&response),
            elapsed: start.elapsed(),
        });

        let bytes = response.bytes().await.map_err(ApiError::Transport)?;

        if !status.is_success() && policy == StatusPolicy::Strict {
            return Err(ApiError::Status {
                status,
                body: serde_json::from_slice(&bytes).ok(),
            });
        }

        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode { status, source })
    }
}

/// Reason phrase the server sent, or the canonical one for the status.
///
/// hyper only records the phrase when it differs from the canonical text.
fn status_text(response: &reqwest::Response) -> String {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .and_then(|reason| std::str::from_utf8(reason.as_bytes()).ok())
        .or_else(|| response.status().canonical_reason())
        .unwrap_or_default()
        .to_string()
}

#[async_trait]
impl ApiService for ApiClient {
    async fn post_json(&self, path: &str, data: Value) -> Result<Value> {
        self.post(path, &data).await
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        self.get(path).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<ApiMessage> {
        crate::services::api::auth::register(self, &request).await
    }

    async fn login(&self, request: LoginRequest) -> Result<ApiMessage> {
        crate::services::api::auth::login(self, &request).await
    }
}
