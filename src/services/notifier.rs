// src/services/notifier.rs

//! IndexNow URL notifier.
//!
//! Broadcasts one payload per batch to every configured endpoint at once and
//! reports each endpoint's answer separately. Nothing is retried.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::future;

use crate::error::Result;
use crate::models::{
    BatchOutcome, Config, EndpointResult, NotificationPayload, SiteConfig, SubmitAllOutcome,
};
use crate::services::inventory::{ContentInventory, site_paths};
use crate::services::pacer::{Pacer, TokioPacer};
use crate::services::transport::{HttpTransport, PingTransport};
use crate::utils::http::excerpt;
use crate::utils::normalize_all;

/// Whether an endpoint status counts as an acknowledgement.
///
/// IndexNow answers 200 (received) or 202 (received, key validation
/// pending); any other 2xx is accepted as well.
pub fn is_acknowledged(status: u16) -> bool {
    (200..300).contains(&status) || status == 200 || status == 202
}

/// Service pushing changed URLs to the IndexNow endpoints.
pub struct UrlNotifier {
    site: SiteConfig,
    endpoints: Vec<String>,
    batch_size: usize,
    batch_delay: Duration,
    recent_paths: Vec<String>,
    transport: Arc<dyn PingTransport>,
    pacer: Arc<dyn Pacer>,
}

impl UrlNotifier {
    /// Create a notifier with explicit transport and pacer.
    pub fn new(config: &Config, transport: Arc<dyn PingTransport>, pacer: Arc<dyn Pacer>) -> Self {
        Self {
            site: config.site.clone(),
            endpoints: config.submit.endpoints.clone(),
            batch_size: config.submit.batch_size.max(1),
            batch_delay: Duration::from_millis(config.submit.batch_delay_ms),
            recent_paths: config.content.recent_paths.clone(),
            transport,
            pacer,
        }
    }

    /// Create a notifier that talks to the real endpoints.
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::from_config(&config.submit)?;
        Ok(Self::new(config, Arc::new(transport), Arc::new(TokioPacer)))
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Submit `urls` as a single batch to every endpoint.
    ///
    /// An empty list is still sent; the endpoints decide what to make of it.
    pub async fn submit<S: AsRef<str>>(&self, urls: &[S]) -> Result<BatchOutcome> {
        let url_list = normalize_all(&self.site.host, urls);
        let payload = NotificationPayload::new(&self.site, url_list);
        let body = serde_json::to_string(&payload)?;

        log::info!(
            "Submitting {} URLs to {} endpoints",
            payload.url_list.len(),
            self.endpoints.len()
        );

        // join_all keeps endpoint order no matter which answers first
        let results = future::join_all(
            self.endpoints
                .iter()
                .map(|endpoint| self.ping(endpoint, &body)),
        )
        .await;

        let outcome = BatchOutcome::new(payload.url_list.len(), results);
        if !outcome.all_succeeded {
            log::warn!(
                "{}/{} endpoints accepted the batch",
                outcome.accepted_count(),
                outcome.results.len()
            );
        }
        Ok(outcome)
    }

    /// Submit one URL.
    pub async fn submit_single(&self, url: &str) -> Result<BatchOutcome> {
        self.submit(&[url]).await
    }

    /// Submit every known page of the site in sequential batches.
    pub async fn submit_all(&self, inventory: &dyn ContentInventory) -> Result<SubmitAllOutcome> {
        self.submit_all_with_progress(inventory, |_, _, _| {}).await
    }

    /// Like [`Self::submit_all`], calling `on_batch(index, batch_count, outcome)`
    /// after each batch completes.
    pub async fn submit_all_with_progress<F>(
        &self,
        inventory: &dyn ContentInventory,
        mut on_batch: F,
    ) -> Result<SubmitAllOutcome>
    where
        F: FnMut(usize, usize, &BatchOutcome),
    {
        let start_time = Utc::now();
        let paths = site_paths(inventory);
        let total_urls = paths.len();
        let batch_count = total_urls.div_ceil(self.batch_size);

        log::info!(
            "Submitting {} URLs in {} batches of up to {}",
            total_urls,
            batch_count,
            self.batch_size
        );

        let mut batches = Vec::with_capacity(batch_count);
        for (index, chunk) in paths.chunks(self.batch_size).enumerate() {
            if index > 0 {
                self.pacer.pause(self.batch_delay).await;
            }

            log::debug!("Batch {}/{}: {} URLs", index + 1, batch_count, chunk.len());
            let outcome = self.submit(chunk).await?;
            on_batch(index, batch_count, &outcome);
            batches.push(outcome);
        }

        Ok(SubmitAllOutcome::new(
            total_urls,
            batches,
            start_time,
            Utc::now(),
        ))
    }

    /// Submit the fixed set of frequently changing pages.
    ///
    /// This does not track what changed; it always sends the same list.
    pub async fn submit_recently_updated(&self) -> Result<BatchOutcome> {
        self.submit(&self.recent_paths).await
    }

    /// Absolute URLs of every known page, in submission order.
    pub fn site_urls(&self, inventory: &dyn ContentInventory) -> Vec<String> {
        normalize_all(&self.site.host, &site_paths(inventory))
    }

    /// Check that the live key file serves the configured key.
    ///
    /// Failures are logged and reported as `false`.
    pub async fn verify_setup(&self) -> bool {
        let location = self.site.key_location();
        match self.transport.get_text(&location).await {
            Ok(body) => {
                let matches = body.trim() == self.site.key;
                if !matches {
                    log::warn!(
                        "Key file at {} does not match the configured key (got {:?})",
                        location,
                        excerpt(&body)
                    );
                }
                matches
            }
            Err(e) => {
                log::warn!("Failed to fetch key file {}: {}", location, e);
                false
            }
        }
    }

    async fn ping(&self, endpoint: &str, body: &str) -> EndpointResult {
        match self.transport.post_json(endpoint, body).await {
            Ok(response) if is_acknowledged(response.status) => {
                log::debug!("{} accepted ({})", endpoint, response.status);
                EndpointResult::accepted(endpoint, response.status)
            }
            Ok(response) => {
                let message = if response.body.trim().is_empty() {
                    format!("HTTP {}", response.status)
                } else {
                    format!("HTTP {}: {}", response.status, excerpt(&response.body))
                };
                log::warn!("{} rejected submission: {}", endpoint, message);
                EndpointResult::rejected(endpoint, response.status, message)
            }
            Err(e) => {
                log::warn!("{} unreachable: {}", endpoint, e);
                EndpointResult::unreachable(endpoint, e.to_string())
            }
        }
    }
}
