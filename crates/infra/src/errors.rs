//! Conversions from transport errors into domain errors

use logship_domain::LogshipError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can
/// be converted back into the domain error
#[derive(Debug)]
pub struct TransportError(pub LogshipError);

impl From<TransportError> for LogshipError {
    fn from(value: TransportError) -> Self {
        value.0
    }
}

impl From<LogshipError> for TransportError {
    fn from(value: LogshipError) -> Self {
        TransportError(value)
    }
}

impl From<HttpError> for TransportError {
    fn from(value: HttpError) -> Self {
        if value.is_timeout() {
            return TransportError(LogshipError::Network("HTTP request timed out".into()));
        }

        if value.is_connect() {
            return TransportError(LogshipError::Network("HTTP connection failure".into()));
        }

        if let Some(status) = value.status() {
            let code = status.as_u16();
            let message = format!(
                "HTTP {} {}",
                code,
                status.canonical_reason().unwrap_or("unknown status")
            );

            return TransportError(match code {
                401 | 403 => LogshipError::Auth(message),
                400..=499 => LogshipError::InvalidInput(message),
                _ => LogshipError::Network(message),
            });
        }

        TransportError(LogshipError::Network(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Client;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn http_status_401_maps_to_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error =
            client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: LogshipError = TransportError::from(error).into();
        match mapped {
            LogshipError::Auth(msg) => assert!(msg.contains("401")),
            other => panic!("expected auth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn http_status_500_maps_to_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error =
            client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: LogshipError = TransportError::from(error).into();
        match mapped {
            LogshipError::Network(msg) => assert!(msg.contains("500")),
            other => panic!("expected network error, got {:?}", other),
        }
    }
}
