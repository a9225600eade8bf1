//! Schedule service API client
//!
//! Thin JSON layer over [`HttpClient`]: builds URLs from path segments,
//! attaches the `X-Employee-Id` header of the requesting user, enforces a
//! timeout and classifies non-success statuses into [`ApiError`].

use std::sync::Arc;
use std::time::Duration;

use gagso_domain::constants::EMPLOYEE_ID_HEADER;
use gagso_domain::{ApiConfig, ValidationErrorBody};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;

use super::errors::ApiError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for API (e.g., "http://localhost:8080")
    pub base_url: String,
    /// Timeout for API requests
    pub timeout: Duration,
    /// Total attempts per request
    pub max_attempts: usize,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(10),
            max_attempts: 1,
        }
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs.max(1)),
            max_attempts: config.max_attempts.max(1) as usize,
        }
    }
}

/// JSON API client for the schedule service
pub struct ApiClient {
    http_client: Arc<HttpClient>,
    base_url: Url,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the base URL is not an absolute http(s)
    /// URL or the HTTP client cannot be built.
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&config.base_url)?;

        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .max_attempts(config.max_attempts)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;

        Ok(Self { http_client: Arc::new(http_client), base_url, config })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute a GET request
    ///
    /// # Arguments
    ///
    /// * `employee_id` - Sent as `X-Employee-Id`
    /// * `segments` - Path segments appended to the base URL (percent-encoded)
    /// * `query` - Query parameters
    ///
    /// # Errors
    ///
    /// Returns error if request fails or response cannot be deserialized
    #[instrument(skip(self, query), fields(path = %segments.join("/")))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        employee_id: &str,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments, query)?;
        debug!(url = %url, "GET request");

        let request = self
            .http_client
            .request(Method::GET, url.clone())
            .header(EMPLOYEE_ID_HEADER, employee_id)
            .header("Accept", "application/json");

        self.execute(request, &url).await
    }

    /// Execute a POST request with a JSON body
    ///
    /// # Errors
    ///
    /// Returns error if request fails or response cannot be deserialized
    #[instrument(skip(self, body), fields(path = %segments.join("/")))]
    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        employee_id: &str,
        segments: &[&str],
        body: &B,
    ) -> Result<R, ApiError> {
        let url = self.endpoint(segments, &[])?;
        debug!(url = %url, "POST request");

        let request = self
            .http_client
            .request(Method::POST, url.clone())
            .header(EMPLOYEE_ID_HEADER, employee_id)
            .header("Accept", "application/json")
            .json(body);

        self.execute(request, &url).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> Result<T, ApiError> {
        let timeout = self.config.timeout;
        let response = match tokio::time::timeout(timeout, self.http_client.send(request)).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(err)) => return Err(ApiError::from(err)),
            Err(_) => {
                warn!(url = %url, ?timeout, "Request timed out");
                return Err(ApiError::Timeout(timeout));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = Self::map_status_error(status, url, body);
            debug!(url = %url, %status, error = %err, "Request failed");
            return Err(err);
        }

        // Handle 204/205 No Content responses
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::Decode(format!(
                    "No content response ({}), but response type cannot be deserialized from empty body",
                    status.as_u16()
                ))
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;
        let result = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))?;

        debug!(url = %url, %status, "Request successful");
        Ok(result)
    }

    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Config(format!("Base URL cannot carry a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    fn map_status_error(status: StatusCode, url: &Url, body: String) -> ApiError {
        if status == StatusCode::BAD_REQUEST {
            if let Ok(parsed) = serde_json::from_str::<ValidationErrorBody>(&body) {
                if !parsed.errors.is_empty() {
                    return ApiError::Validation(parsed.errors);
                }
            }
        }

        let message = if body.is_empty() {
            format!("{} returned status {}", url, status)
        } else {
            format!("{} returned status {}: {}", url, status, body)
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ApiError::Auth(message)
        } else if status == StatusCode::NOT_FOUND {
            ApiError::NotFound(message)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            ApiError::RateLimit(message)
        } else if status.is_server_error() {
            ApiError::Server(message)
        } else if status.is_client_error() {
            ApiError::Client(message)
        } else {
            ApiError::Network(message)
        }
    }
}

/// Validate a configured base URL.
///
/// # Errors
///
/// Returns `ApiError::Config` for unparseable, relative or non-http(s) URLs.
pub fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ApiError::Config(format!("Invalid API base URL '{}': {}", raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::Config(format!("Unsupported API base URL scheme: {}", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(ApiError::Config(format!("API base URL cannot be a base: {}", raw)));
    }
    Ok(url)
}
