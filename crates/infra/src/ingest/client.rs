/// HTTP adapter for the ingestion service API
use async_trait::async_trait;
use logship_core::EventTransport;
use logship_domain::{IngestStatus, LogshipError, Result, TransportConfig};
use reqwest::Method;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::errors::TransportError;
use crate::http::HttpClient;

/// Header carrying the rendered tag list
const TAG_HEADER: &str = "X-Logship-Tag";

/// Acknowledgement text the service uses for accepted payloads
const ACK_OK: &str = "ok";

/// Acknowledgement body returned by the ingestion service
#[derive(Debug, Deserialize)]
struct IngestAck {
    response: String,
}

/// Event transport backed by the ingestion service's HTTP API
///
/// Single events are POSTed to `/inputs/{token}`, batches to
/// `/bulk/{token}`; both paths accept the same newline-delimited body.
pub struct HttpEventTransport {
    http_client: HttpClient,
    endpoint: String,
}

impl HttpEventTransport {
    /// Create a transport from configuration
    ///
    /// # Errors
    /// Returns `LogshipError::Config` when the endpoint is not a valid
    /// absolute URL.
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|err| {
            LogshipError::Config(format!(
                "invalid ingestion endpoint '{}': {err}",
                config.endpoint
            ))
        })?;

        let http_client = HttpClient::from_config(config)?;

        Ok(Self {
            http_client,
            endpoint: endpoint.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Create a transport bound to the production ingestion endpoint
    pub fn production() -> Result<Self> {
        Self::new(&TransportConfig::default())
    }

    async fn post_events(
        &self,
        path: &str,
        token: &str,
        tags: Option<&str>,
        body: &str,
    ) -> Result<IngestStatus> {
        let url = format!("{}/{}/{}", self.endpoint, path, token);

        let mut request = self
            .http_client
            .request(Method::POST, &url)
            .header("Content-Type", "text/plain")
            .body(body.to_string());

        if let Some(tags) = tags {
            request = request.header(TAG_HEADER, tags);
        }

        let response = self.http_client.send(request).await?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "received ingestion response");

        if !status.is_success() {
            let reason = response
                .text()
                .await
                .unwrap_or_else(|_| "unreadable response body".to_string());
            return Ok(IngestStatus::rejected(Some(status.as_u16()), reason));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| LogshipError::from(TransportError::from(err)))?;
        let ack: IngestAck = serde_json::from_slice(&bytes).map_err(|err| {
            LogshipError::Internal(format!("failed to parse ingestion acknowledgement: {err}"))
        })?;

        if ack.response == ACK_OK {
            Ok(IngestStatus::Ok)
        } else {
            Ok(IngestStatus::rejected(None, ack.response))
        }
    }
}

#[async_trait]
impl EventTransport for HttpEventTransport {
    async fn send_single(
        &self,
        token: &str,
        tags: Option<&str>,
        body: &str,
    ) -> Result<IngestStatus> {
        self.post_events("inputs", token, tags, body).await
    }

    async fn send_bulk(
        &self,
        token: &str,
        tags: Option<&str>,
        body: &str,
    ) -> Result<IngestStatus> {
        self.post_events("bulk", token, tags, body).await
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::sync::Arc;
    use std::time::Duration;

    use logship_core::EventSubmitter;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const TOKEN: &str = "test-token";

    fn test_config(endpoint: String) -> TransportConfig {
        TransportConfig {
            endpoint,
            timeout: Duration::from_secs(5),
            max_attempts: 1,
            retry_backoff: Duration::from_millis(10),
            user_agent: "logship-test".to_string(),
        }
    }

    fn test_transport(server: &MockServer) -> HttpEventTransport {
        HttpEventTransport::new(&test_config(server.uri())).expect("transport")
    }

    fn ok_ack() -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "response": "ok" }))
    }

    #[tokio::test]
    async fn single_events_post_to_the_inputs_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/inputs/{TOKEN}")))
            .and(body_string("event\n"))
            .respond_with(ok_ack())
            .expect(1)
            .mount(&server)
            .await;

        let transport = test_transport(&server);
        let status = transport.send_single(TOKEN, None, "event\n").await.expect("status");

        assert!(status.is_ok());
    }

    #[tokio::test]
    async fn batches_post_to_the_bulk_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/bulk/{TOKEN}")))
            .and(body_string("E 1\nE 2\nE 3\n"))
            .respond_with(ok_ack())
            .expect(1)
            .mount(&server)
            .await;

        let transport = test_transport(&server);
        let status =
            transport.send_bulk(TOKEN, None, "E 1\nE 2\nE 3\n").await.expect("status");

        assert!(status.is_ok());
    }

    #[tokio::test]
    async fn tag_header_carries_the_rendered_tag_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/bulk/{TOKEN}")))
            .and(header(TAG_HEADER, "foo,bar"))
            .respond_with(ok_ack())
            .expect(1)
            .mount(&server)
            .await;

        let transport = test_transport(&server);
        let status =
            transport.send_bulk(TOKEN, Some("foo,bar"), "event\n").await.expect("status");

        assert!(status.is_ok());
    }

    #[tokio::test]
    async fn tag_header_is_omitted_when_no_tags_are_set() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(ok_ack()).mount(&server).await;

        let transport = test_transport(&server);
        transport.send_single(TOKEN, None, "event\n").await.expect("status");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get(TAG_HEADER).is_none());
    }

    #[tokio::test]
    async fn non_success_status_is_reported_as_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad payload"))
            .mount(&server)
            .await;

        let transport = test_transport(&server);
        let status = transport.send_single(TOKEN, None, "event\n").await.expect("status");

        assert_eq!(status, IngestStatus::rejected(Some(400), "bad payload"));
    }

    #[tokio::test]
    async fn unexpected_acknowledgement_is_reported_as_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "response": "failed" })),
            )
            .mount(&server)
            .await;

        let transport = test_transport(&server);
        let status = transport.send_single(TOKEN, None, "event\n").await.expect("status");

        assert_eq!(status, IngestStatus::rejected(None, "failed"));
    }

    #[tokio::test]
    async fn connection_failure_surfaces_as_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener); // release the port so that requests fail with ECONNREFUSED

        let transport =
            HttpEventTransport::new(&test_config(format!("http://{}", addr))).expect("transport");
        let result = transport.send_single(TOKEN, None, "event\n").await;

        assert!(matches!(result, Err(LogshipError::Network(_))));
    }

    #[test]
    fn invalid_endpoint_fails_fast_at_construction() {
        let result = HttpEventTransport::new(&test_config("not a url".to_string()));

        assert!(matches!(result, Err(LogshipError::Config(_))));
    }

    #[tokio::test]
    async fn submitter_delivers_tagged_batches_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/bulk/{TOKEN}")))
            .and(header(TAG_HEADER, "foo,bar"))
            .and(body_string("multi-line\revent here\nevent 2\n"))
            .respond_with(ok_ack())
            .expect(1)
            .mount(&server)
            .await;

        let transport = Arc::new(test_transport(&server));
        let mut submitter = EventSubmitter::new(TOKEN, transport).expect("submitter");
        submitter.set_tags(["foo", "bar"]);

        let ok = submitter
            .log_bulk(Some([Some("multi-line\nevent here"), Some("event 2")]))
            .await;

        assert!(ok);
    }
}
