//! Per-endpoint and per-batch submission outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one POST to one endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EndpointResult {
    /// Endpoint URL
    pub endpoint: String,

    /// HTTP status, or 0 when no response arrived
    pub status_code: u16,

    /// Whether the endpoint acknowledged the submission
    pub success: bool,

    /// Why the submission was not acknowledged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl EndpointResult {
    pub fn accepted(endpoint: impl Into<String>, status_code: u16) -> Self {
        Self {
            endpoint: endpoint.into(),
            status_code,
            success: true,
            error_message: None,
        }
    }

    pub fn rejected(
        endpoint: impl Into<String>,
        status_code: u16,
        message: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            status_code,
            success: false,
            error_message: Some(message.into()),
        }
    }

    /// Failure before any response was received.
    pub fn unreachable(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::rejected(endpoint, 0, message)
    }
}

/// Outcome of one payload broadcast to every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub urls_submitted: usize,
    /// One entry per endpoint, in configured endpoint order
    pub results: Vec<EndpointResult>,
    pub all_succeeded: bool,
}

impl BatchOutcome {
    pub fn new(urls_submitted: usize, results: Vec<EndpointResult>) -> Self {
        let all_succeeded = results.iter().all(|r| r.success);
        Self {
            urls_submitted,
            results,
            all_succeeded,
        }
    }

    /// Number of endpoints that acknowledged the batch.
    pub fn accepted_count(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }
}

/// Aggregate outcome of a full-site submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAllOutcome {
    pub total_urls: usize,
    pub batches: Vec<BatchOutcome>,
    pub all_succeeded: bool,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl SubmitAllOutcome {
    pub fn new(
        total_urls: usize,
        batches: Vec<BatchOutcome>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        let all_succeeded = batches.iter().all(|b| b.all_succeeded);
        Self {
            total_urls,
            batches,
            all_succeeded,
            start_time,
            end_time,
        }
    }

    /// Batches where at least one endpoint failed.
    pub fn failed_batches(&self) -> usize {
        self.batches.iter().filter(|b| !b.all_succeeded).count()
    }
}
