// src/utils/console.rs

//! Human-facing report output for the CLI.
//!
//! Diagnostics go through the `log` facade; this module prints the
//! submission reports the operator actually reads.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;

use crate::models::{BatchOutcome, EndpointResult};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silence everything except errors.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn enabled() -> bool {
    !QUIET.load(Ordering::Relaxed)
}

fn format_line(tag: &str, message: &str) -> String {
    format!("[{}] [{}] {}", Local::now().format("%H:%M:%S"), tag, message)
}

/// Print a header
pub fn header(title: &str) {
    if enabled() {
        let border = "═".repeat(60);
        println!("{border}");
        println!("  {title}");
        println!("{border}");
    }
}

/// Print a step in a process
pub fn step(step_num: usize, total: usize, message: &str) {
    if enabled() {
        println!("{}", format_line(&format!("STEP {step_num}/{total}"), message));
    }
}

/// Print a plain informational line
pub fn info(message: &str) {
    if enabled() {
        println!("{}", format_line("INFO", message));
    }
}

/// Print a success line
pub fn success(message: &str) {
    if enabled() {
        println!("{}", format_line("INFO", &format!("✓ {message}")));
    }
}

/// Print a failure line; shown even when quiet
pub fn failure(message: &str) {
    eprintln!("{}", format_line("FAIL", &format!("✗ {message}")));
}

/// Print a sub-item (indented)
pub fn sub_item(message: &str) {
    if enabled() {
        println!("    {message}");
    }
}

/// Print a summary section
pub fn summary(title: &str, items: &[(&str, String)]) {
    if enabled() {
        println!();
        println!("{}", format_line("SUMMARY", title));
        for (key, value) in items {
            println!("    {key}: {value}");
        }
    }
}

/// One line per endpoint, e.g. `✓ https://www.bing.com/indexnow (200)`.
pub fn endpoint_line(result: &EndpointResult) -> String {
    let mark = if result.success { "✓" } else { "✗" };
    let status = if result.status_code == 0 {
        "no response".to_string()
    } else {
        result.status_code.to_string()
    };
    match &result.error_message {
        Some(message) => format!("{mark} {} ({status}): {message}", result.endpoint),
        None => format!("{mark} {} ({status})", result.endpoint),
    }
}

/// Print the per-endpoint breakdown of a batch.
pub fn batch_report(outcome: &BatchOutcome) {
    for result in &outcome.results {
        if result.success {
            sub_item(&endpoint_line(result));
        } else {
            // Failures are never hidden, even in quiet mode
            eprintln!("    {}", endpoint_line(result));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_line_success() {
        let line = endpoint_line(&EndpointResult::accepted("https://www.bing.com/indexnow", 202));
        assert_eq!(line, "✓ https://www.bing.com/indexnow (202)");
    }

    #[test]
    fn test_endpoint_line_network_failure() {
        let line = endpoint_line(&EndpointResult::unreachable(
            "https://yandex.com/indexnow",
            "timed out",
        ));
        assert_eq!(line, "✗ https://yandex.com/indexnow (no response): timed out");
    }
}
