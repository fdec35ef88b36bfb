//! HTTP implementation of [`Backend`].

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::backend::{
    Backend, COMPLETE_PATH, CONFIGURATION_PATH, Candidate, CompletionRequest, CompletionResponse,
    HEALTHCHECK_PATH, RemoteError, VALIDATE_PATH, ValidateRequest, ValidateResponse,
};
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to reach the backend.
#[derive(Clone)]
pub struct BackendConfig {
    pub base_url: String,
    /// Applies to the whole request, connection included.
    pub timeout: Duration,
    /// Sent as a bearer token when present.
    pub token: Option<String>,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            token: None,
        }
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Subset of the console configuration this crate cares about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Backend reached over HTTP with JSON bodies.
#[derive(Clone)]
pub struct HttpBackend {
    http_client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let url = reqwest::Url::parse(&config.base_url).map_err(|e| Error::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl {
                url: config.base_url.clone(),
                reason: format!("unsupported scheme `{}`", url.scheme()),
            });
        }

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Succeeds when the backend answers its health endpoint with a 2xx status.
    pub async fn health_check(&self) -> Result<()> {
        let response = self
            .authorize(self.http_client.get(self.url(HEALTHCHECK_PATH)))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::Http {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }

    pub async fn configuration(&self) -> Result<Configuration> {
        self.get(CONFIGURATION_PATH).await
    }

    /// Dimension names starting with `prefix` (case-insensitive), sorted.
    pub async fn dimensions(&self, prefix: &str) -> Result<Vec<String>> {
        let configuration = self.configuration().await?;
        Ok(filter_dimensions(configuration.dimensions, prefix))
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self
            .authorize(self.http_client.get(self.url(endpoint)))
            .send()
            .await?;

        handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> Result<T> {
        let response = self
            .authorize(self.http_client.post(self.url(endpoint)))
            .json(body)
            .send()
            .await?;

        handle_response(response).await
    }
}

impl fmt::Debug for HttpBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpBackend")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Backend for HttpBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<Vec<Candidate>> {
        debug!(what = ?request.what, column = ?request.column, prefix = ?request.prefix, "requesting completions");
        let response: CompletionResponse = self.post(COMPLETE_PATH, request).await?;
        Ok(response.completions)
    }

    async fn validate(&self, filter: &str) -> Result<Vec<RemoteError>> {
        debug!(len = filter.len(), "validating filter");
        let body = ValidateRequest {
            filter: filter.to_string(),
        };
        let response: ValidateResponse = self.post(VALIDATE_PATH, &body).await?;
        Ok(response.errors.unwrap_or_default())
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(Error::Http {
            status: status.as_u16(),
            message: error_message(status, &body),
        });
    }

    Ok(serde_json::from_str(&body)?)
}

/// Best-effort human message for an error response.
///
/// Understands `{"message": ...}` and `{"error": {"code": ..., "message": ...}}`,
/// falls back to the raw body, then to the status reason.
pub(crate) fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
        if let Some(error) = value.get("error") {
            let message = error.get("message").and_then(|m| m.as_str()).unwrap_or("");
            return match error.get("code") {
                Some(serde_json::Value::String(code)) => format!("{code}. {message}"),
                Some(code) if !code.is_null() => format!("{code}. {message}"),
                _ => message.to_string(),
            };
        }
    }

    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}

/// Case-insensitive prefix filter over dimension names, sorted for display.
pub fn filter_dimensions(dimensions: Vec<String>, prefix: &str) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    let mut matching: Vec<String> = dimensions
        .into_iter()
        .filter(|d| d.to_lowercase().starts_with(&prefix))
        .collect();
    matching.sort_by_key(|d| d.to_lowercase());
    matching
}
