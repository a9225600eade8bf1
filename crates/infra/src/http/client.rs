//! reqwest wrapper with opt-in retries
//!
//! The schedule client surfaces failures immediately and leaves retrying to
//! the user, so a request is sent once unless `max_attempts` is raised.

use std::time::Duration;

use gagso_domain::GagsoError;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::{debug, warn};

use crate::errors::InfraError;

const USER_AGENT: &str = concat!("gagso/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_BACKOFF: Duration = Duration::from_millis(200);

/// HTTP transport shared by every API adapter.
///
/// When more than one attempt is configured, 5xx responses and
/// connect/timeout failures are retried with doubling backoff. Anything else
/// is returned on the first attempt.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    backoff: Duration,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Client with a single attempt and a 10s timeout.
    pub fn new() -> Result<Self, GagsoError> {
        Self::builder().build()
    }

    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send `builder`, retrying per the configured attempt budget.
    ///
    /// Non-success statuses are returned as responses; only transport failures
    /// become errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, GagsoError> {
        let mut attempt = 1;
        loop {
            let request = builder
                .try_clone()
                .ok_or_else(|| GagsoError::Internal("request body is not replayable".into()))?
                .build()
                .map_err(|err| GagsoError::from(InfraError::from(err)))?;
            let (method, url) = (request.method().clone(), request.url().clone());
            let last_attempt = attempt >= self.max_attempts;

            match self.client.execute(request).await {
                Ok(response) if response.status().is_server_error() && !last_attempt => {
                    warn!(attempt, %method, %url, status = %response.status(), "Server error, retrying");
                }
                Ok(response) => {
                    debug!(attempt, %method, %url, status = %response.status(), "HTTP response");
                    return Ok(response);
                }
                Err(err) if is_transient(&err) && !last_attempt => {
                    warn!(attempt, %method, %url, error = %err, "Transport error, retrying");
                }
                Err(err) => {
                    debug!(attempt, %method, %url, error = %err, "HTTP request failed");
                    return Err(GagsoError::from(InfraError::from(err)));
                }
            }

            tokio::time::sleep(self.delay_before(attempt + 1)).await;
            attempt += 1;
        }
    }

    /// Backoff before `attempt` (2-based): base, 2x base, 4x base, ...
    fn delay_before(&self, attempt: usize) -> Duration {
        let doublings = u32::try_from(attempt.saturating_sub(2)).unwrap_or(u32::MAX).min(6);
        self.backoff.saturating_mul(1 << doublings)
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_attempts: usize,
    backoff: Duration,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: DEFAULT_TIMEOUT, max_attempts: 1, backoff: DEFAULT_BACKOFF }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total attempts including the first one; clamped to at least 1.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn build(self) -> Result<HttpClient, GagsoError> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .no_proxy()
            .build()
            .map_err(|err| GagsoError::from(InfraError::from(err)))?;

        Ok(HttpClient { client, max_attempts: self.max_attempts, backoff: self.backoff })
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use reqwest::StatusCode;
    use wiremock::matchers::{header_regex, method};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn single_attempt_returns_server_error_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header_regex("user-agent", "^gagso/"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let response = client.send(client.request(Method::GET, server.uri())).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn retries_until_success_within_budget() {
        let server = MockServer::start().await;
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        Mock::given(method("GET"))
            .respond_with(move |_: &Request| {
                if seen.fetch_add(1, Ordering::SeqCst) == 0 {
                    ResponseTemplate::new(502)
                } else {
                    ResponseTemplate::new(200)
                }
            })
            .expect(2)
            .mount(&server)
            .await;

        let client = HttpClient::builder()
            .max_attempts(3)
            .backoff(Duration::from_millis(5))
            .build()
            .unwrap();
        let response = client.send(client.request(Method::GET, server.uri())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn client_errors_are_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::builder().max_attempts(3).build().unwrap();
        let response = client.send(client.request(Method::GET, server.uri())).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = HttpClient::builder()
            .max_attempts(2)
            .backoff(Duration::from_millis(5))
            .build()
            .unwrap();
        let result = client.send(client.request(Method::GET, &url)).await;

        assert!(matches!(result, Err(GagsoError::Network(_))), "got {result:?}");
    }

    #[test]
    fn backoff_doubles_per_retry() {
        let client = HttpClient::builder().backoff(Duration::from_millis(100)).build().unwrap();
        assert_eq!(client.delay_before(2), Duration::from_millis(100));
        assert_eq!(client.delay_before(3), Duration::from_millis(200));
        assert_eq!(client.delay_before(4), Duration::from_millis(400));
    }
}
