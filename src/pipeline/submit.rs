// src/pipeline/submit.rs

//! Submission runs with operator-facing reports.

use crate::error::Result;
use crate::models::{BatchOutcome, SubmitAllOutcome};
use crate::services::{ContentInventory, UrlNotifier};
use crate::utils::console;

/// Submit every known page in batches.
pub async fn run_submit_all(
    notifier: &UrlNotifier,
    inventory: &dyn ContentInventory,
) -> Result<SubmitAllOutcome> {
    console::header("IndexNow: submitting all site URLs");

    let outcome = notifier
        .submit_all_with_progress(inventory, |index, batch_count, batch| {
            console::step(
                index + 1,
                batch_count,
                &format!(
                    "{} URLs, {}/{} endpoints accepted",
                    batch.urls_submitted,
                    batch.accepted_count(),
                    batch.results.len()
                ),
            );
            console::batch_report(batch);
        })
        .await?;

    console::summary(
        "Submission complete",
        &[
            ("URLs", outcome.total_urls.to_string()),
            ("Batches", outcome.batches.len().to_string()),
            ("Batches with failures", outcome.failed_batches().to_string()),
            (
                "Duration",
                format!(
                    "{:.1}s",
                    (outcome.end_time - outcome.start_time).num_milliseconds() as f64 / 1000.0
                ),
            ),
        ],
    );
    report_result(outcome.all_succeeded, "All batches accepted by every endpoint");

    Ok(outcome)
}

/// Submit one URL.
pub async fn run_submit_url(notifier: &UrlNotifier, url: &str) -> Result<BatchOutcome> {
    console::header(&format!("IndexNow: submitting {url}"));
    let outcome = notifier.submit_single(url).await?;
    report_batch(&outcome);
    Ok(outcome)
}

/// Submit the fixed set of high-churn pages.
pub async fn run_submit_recent(notifier: &UrlNotifier) -> Result<BatchOutcome> {
    console::header("IndexNow: submitting recently updated pages");
    let outcome = notifier.submit_recently_updated().await?;
    report_batch(&outcome);
    Ok(outcome)
}

/// Check the live key file. Never fails; the answer is only reported.
pub async fn run_verify(notifier: &UrlNotifier) -> bool {
    let site = notifier.site();
    console::header("IndexNow: verifying setup");
    console::info(&format!("Host: {}", site.host));
    console::info(&format!("Key location: {}", site.key_location()));

    let verified = notifier.verify_setup().await;
    if verified {
        console::success("Key file is served and matches the configured key");
    } else {
        console::failure("Key file is missing or does not match the configured key");
        console::sub_item(&format!(
            "Serve a file at {} containing exactly the key",
            site.key_file_path()
        ));
    }
    verified
}

/// Print the enumerated site URLs and batch plan without submitting.
pub fn run_list(notifier: &UrlNotifier, inventory: &dyn ContentInventory) -> Vec<String> {
    let urls = notifier.site_urls(inventory);
    for url in &urls {
        println!("{url}");
    }
    console::summary(
        "Dry run",
        &[
            ("URLs", urls.len().to_string()),
            (
                "Batches",
                batch_count(urls.len(), notifier.batch_size()).to_string(),
            ),
            ("Endpoints", notifier.endpoints().len().to_string()),
        ],
    );
    urls
}

/// Batches `submit_all` sends for `url_count` URLs.
fn batch_count(url_count: usize, batch_size: usize) -> usize {
    url_count.div_ceil(batch_size.max(1))
}

fn report_batch(outcome: &BatchOutcome) {
    console::info(&format!(
        "{} URLs, {}/{} endpoints accepted",
        outcome.urls_submitted,
        outcome.accepted_count(),
        outcome.results.len()
    ));
    console::batch_report(outcome);
    report_result(outcome.all_succeeded, "Accepted by every endpoint");
}

fn report_result(all_succeeded: bool, message: &str) {
    if all_succeeded {
        console::success(message);
    } else {
        console::failure("Some endpoints did not accept the submission");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crate::models::{Config, ContentConfig};
    use crate::services::{HttpTransport, TokioPacer};

    fn small_site() -> (Config, ContentConfig) {
        let mut config = Config::default();
        config.submit.batch_size = 4;
        let content = ContentConfig {
            static_paths: vec!["/".into(), "/schedule".into(), "/tickets".into()],
            recent_paths: vec!["/".into()],
            teams: vec!["fiji".into(), "japan".into()],
            venues: vec!["adelaide-oval".into()],
            cities: vec!["perth".into()],
            matches: vec!["match-1".into(), "match-2".into()],
        };
        (config, content)
    }

    #[test]
    fn test_run_list_returns_every_site_url() {
        let (config, content) = small_site();
        let transport = HttpTransport::from_config(&config.submit).unwrap();
        let notifier = UrlNotifier::new(&config, Arc::new(transport), Arc::new(TokioPacer));

        let urls = run_list(&notifier, &content);

        // 3 static + 2 per team + 1 venue + 1 city + 2 matches
        assert_eq!(urls.len(), 11);
        assert_eq!(urls[0], "https://rugbyaustralia2027.com/");
        assert!(urls.contains(&"https://rugbyaustralia2027.com/teams/fiji/schedule".to_string()));
        assert_eq!(batch_count(urls.len(), notifier.batch_size()), 3);
    }

    #[test]
    fn test_batch_count_rounds_up() {
        assert_eq!(batch_count(0, 100), 0);
        assert_eq!(batch_count(100, 100), 1);
        assert_eq!(batch_count(101, 100), 2);
        assert_eq!(batch_count(12, 5), 3);
    }
}
