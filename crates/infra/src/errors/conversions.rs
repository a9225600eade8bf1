//! Conversions from external infrastructure errors into domain errors.

use gagso_domain::GagsoError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub GagsoError);

impl From<InfraError> for GagsoError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<GagsoError> for InfraError {
    fn from(value: GagsoError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoGagsoError {
    fn into_gagso(self) -> GagsoError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → GagsoError */
/* -------------------------------------------------------------------------- */

impl IntoGagsoError for HttpError {
    fn into_gagso(self) -> GagsoError {
        if self.is_timeout() {
            return GagsoError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return GagsoError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return GagsoError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => GagsoError::Auth(message),
                404 => GagsoError::NotFound(message),
                400..=499 => GagsoError::InvalidInput(message),
                _ => GagsoError::Server(message),
            };
        }

        if self.is_decode() {
            return GagsoError::Server(format!("malformed response body: {self}"));
        }

        GagsoError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_gagso())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → GagsoError */
/* -------------------------------------------------------------------------- */

impl IntoGagsoError for JsonError {
    fn into_gagso(self) -> GagsoError {
        GagsoError::Server(format!(
            "unexpected response shape at line {} column {}: {}",
            self.line(),
            self.column(),
            self
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_gagso())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn status_error(status: StatusCode) -> HttpError {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(status)).mount(&server).await;

        let client = Client::builder().no_proxy().build().unwrap();
        client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err()
    }

    #[tokio::test]
    async fn http_status_401_maps_to_auth_error() {
        let mapped: GagsoError = InfraError::from(status_error(StatusCode::UNAUTHORIZED).await).into();
        match mapped {
            GagsoError::Auth(msg) => assert!(msg.contains("401")),
            other => panic!("expected auth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn http_status_404_and_503_map_by_class() {
        let not_found: GagsoError = InfraError::from(status_error(StatusCode::NOT_FOUND).await).into();
        assert!(matches!(not_found, GagsoError::NotFound(_)));

        let unavailable: GagsoError =
            InfraError::from(status_error(StatusCode::SERVICE_UNAVAILABLE).await).into();
        assert!(matches!(unavailable, GagsoError::Server(_)));
    }

    #[test]
    fn json_errors_are_server_errors() {
        let err = serde_json::from_str::<Vec<String>>("{not json").unwrap_err();
        let mapped: GagsoError = InfraError::from(err).into();
        match mapped {
            GagsoError::Server(msg) => assert!(msg.contains("line 1")),
            other => panic!("expected server error, got {:?}", other),
        }
    }
}
