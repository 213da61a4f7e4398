//! Pipeline entry points for notifier operations.
//!
//! - `run_submit_all`: Submit every known page in batches
//! - `run_submit_url`: Submit a single URL
//! - `run_submit_recent`: Submit the high-churn pages
//! - `run_verify`: Check the published key file
//! - `run_list`: Print the URL set without submitting

pub mod submit;

pub use submit::{run_list, run_submit_all, run_submit_recent, run_submit_url, run_verify};
