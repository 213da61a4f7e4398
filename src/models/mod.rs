// src/models/mod.rs

//! Domain models for the notifier.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod outcome;
mod payload;

// Re-export all public types
pub use config::{
    Config, ContentConfig, MAX_URLS_PER_SUBMISSION, ServerConfig, SiteConfig, SubmitConfig,
};
pub use outcome::{BatchOutcome, EndpointResult, SubmitAllOutcome};
pub use payload::NotificationPayload;
