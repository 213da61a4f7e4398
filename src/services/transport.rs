//! Network seam for the notifier.
//!
//! `UrlNotifier` never touches `reqwest` directly; it goes through
//! [`PingTransport`] so tests can script endpoint behavior.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::error::Result;
use crate::models::SubmitConfig;
use crate::utils::http::create_async_client;

/// Content type required by the IndexNow endpoints.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Status and body of an endpoint response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingResponse {
    pub status: u16,
    pub body: String,
}

/// Outbound HTTP operations used by the notifier.
#[async_trait]
pub trait PingTransport: Send + Sync {
    /// POST a JSON document. Any HTTP status is `Ok`; `Err` means no response.
    async fn post_json(&self, endpoint: &str, body: &str) -> Result<PingResponse>;

    /// GET a text document.
    async fn get_text(&self, url: &str) -> Result<String>;
}

/// `reqwest`-backed transport.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a transport whose client carries the configured timeout and user agent.
    pub fn from_config(config: &SubmitConfig) -> Result<Self> {
        Ok(Self::new(create_async_client(config)?))
    }
}

#[async_trait]
impl PingTransport for HttpTransport {
    async fn post_json(&self, endpoint: &str, body: &str) -> Result<PingResponse> {
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body.to_owned())
            .send()
            .await?;

        let status = response.status().as_u16();
        // The status is what matters; an unreadable body is just reported as empty.
        let body = response.text().await.unwrap_or_default();
        Ok(PingResponse { status, body })
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        Ok(self.client.get(url).send().await?.text().await?)
    }
}
