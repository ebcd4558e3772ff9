use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{debug, debug_span, Instrument};

use nope_core::ports::NopeSourcePort;
use nope_core::NopeError;

/// Fetches Nope payloads over HTTP.
///
/// The same adapter serves both sides: pointed at the upstream API it backs
/// the proxy and page metadata, pointed at `/api/nope` it backs the card.
#[derive(Debug, Clone)]
pub struct HttpNopeSource {
    client: reqwest::Client,
    url: String,
}

impl HttpNopeSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl NopeSourcePort for HttpNopeSource {
    async fn fetch(&self) -> Result<Value, NopeError> {
        let span = debug_span!("infra.http.nope_fetch", url = %self.url);
        async {
            let response = self
                .client
                .get(&self.url)
                .header(ACCEPT, "application/json")
                .send()
                .await
                .map_err(map_transport_err)?;

            let status = response.status();
            if !status.is_success() {
                return Err(NopeError::UpstreamStatus(status.as_u16()));
            }

            let body = response.json::<Value>().await.map_err(|e| {
                if e.is_decode() {
                    NopeError::UpstreamDecode(e.to_string())
                } else {
                    map_transport_err(e)
                }
            })?;

            debug!(status = status.as_u16(), "nope payload received");
            Ok(body)
        }
        .instrument(span)
        .await
    }
}

fn map_transport_err(err: reqwest::Error) -> NopeError {
    if err.is_timeout() {
        NopeError::UpstreamNetwork(format!("request timed out: {err}"))
    } else {
        NopeError::UpstreamNetwork(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn source_for(server: &Server) -> HttpNopeSource {
        HttpNopeSource::new(format!("{}/", server.url()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn fetch_sends_accept_header_and_returns_body() {
        let mut server = Server::new_async().await;
        let body = json!({
            "success": true,
            "data": { "language": "en", "nope": "Absolutely not." },
            "error": null,
            "message": "ok"
        });
        let mock = server
            .mock("GET", "/")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let value = source_for(&server).fetch().await.unwrap();

        assert_eq!(value, body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_maps_non_success_status() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(503)
            .with_body("unavailable")
            .create_async()
            .await;

        let err = source_for(&server).fetch().await.unwrap_err();

        assert_eq!(err, NopeError::UpstreamStatus(503));
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[tokio::test]
    async fn fetch_treats_client_errors_as_failure() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .match_header("accept", Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let err = source_for(&server).fetch().await.unwrap_err();

        assert_eq!(err, NopeError::UpstreamStatus(404));
    }

    #[tokio::test]
    async fn fetch_rejects_non_json_body() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let err = source_for(&server).fetch().await.unwrap_err();

        assert!(matches!(err, NopeError::UpstreamDecode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn fetch_reports_connection_failure() {
        // nothing listens on port 9 (discard) on test machines
        let source =
            HttpNopeSource::new("http://127.0.0.1:9/", Duration::from_secs(2)).unwrap();

        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, NopeError::UpstreamNetwork(_)), "got {err:?}");
        assert!(!err.to_string().is_empty());
    }
}
