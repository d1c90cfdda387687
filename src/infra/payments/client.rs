//! Shared HTTP plumbing for the payments API adapters.
//!
//! Every call goes through [`ApiClient::send`], which is the single place
//! where transport failures, HTTP statuses and remote error bodies are
//! normalized into [`RepositoryError`].

use std::env;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::domain::payloads::RemoteErrorBody;
use crate::domain::{ErrorCode, RepositoryError};

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the payments API
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: String,
    /// Bearer token forwarded on every request
    pub token: Option<SecretString>,
    pub timeout: Duration,
}

impl ApiClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load from environment variables:
    /// - `PAYMENTS_API_URL` (required)
    /// - `PAYMENTS_API_TOKEN` (optional, empty means none)
    /// - `PAYMENTS_API_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, env::VarError> {
        let base_url = env::var("PAYMENTS_API_URL")?;
        let token = env::var("PAYMENTS_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .map(SecretString::from);
        let timeout_secs = env::var("PAYMENTS_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            base_url,
            token,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    #[must_use]
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Thin wrapper around `reqwest::Client` that knows the base URL and token
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl ApiClient {
    /// Build a client. Fails if the base URL cannot carry a path or the TLS
    /// backend cannot be initialized.
    pub fn new(config: ApiClientConfig) -> Result<Self, RepositoryError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            RepositoryError::Unknown(format!("Invalid base URL '{}': {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(RepositoryError::Unknown(format!(
                "Base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RepositoryError::Unknown(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url,
            token: config.token,
        })
    }

    /// Base URL joined with `segments`, each percent-encoded as one path segment
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, RepositoryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RepositoryError::Unknown("Base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder, RepositoryError> {
        let url = self.endpoint(segments)?;
        debug!(%method, %url, "Calling payments API");
        let builder = self.http_client.request(method, url);
        Ok(match &self.token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        })
    }

    /// Send and return the response if the status is a success
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, RepositoryError> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                error!(error = %e, "Payments API request timed out");
                RepositoryError::Unknown(format!("Request timed out: {e}"))
            } else {
                error!(error = %e, "Payments API request failed");
                RepositoryError::Unknown(format!("Request failed: {e}"))
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, body = %body, "Payments API returned error");
        Err(error_from_status(status, &body))
    }

    /// Send and decode the JSON body into `T`
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, RepositoryError> {
        let response = self.send(builder).await?;
        let bytes = response.bytes().await.map_err(|e| {
            error!(error = %e, "Failed to read payments API response");
            RepositoryError::Unknown(format!("Failed to read response: {e}"))
        })?;
        serde_json::from_slice(&bytes).map_err(|e| {
            error!(error = %e, "Failed to parse payments API response");
            RepositoryError::Serialization(e.to_string())
        })
    }

    /// Send and discard the body
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), RepositoryError> {
        self.send(builder).await.map(|_| ())
    }
}

/// Normalize a non-success response. The HTTP status decides for 404 and 409;
/// otherwise the body's `code` does, and anything unrecognized is `Unknown`.
fn error_from_status(status: StatusCode, body: &str) -> RepositoryError {
    let parsed: RemoteErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"));

    match status {
        StatusCode::NOT_FOUND => RepositoryError::NotFound(message),
        StatusCode::CONFLICT => RepositoryError::AlreadyExists(message),
        _ => {
            let code = parsed
                .code
                .as_deref()
                .map_or(ErrorCode::Unknown, ErrorCode::from_remote);
            RepositoryError::from_code(code, message)
        }
    }
}
