// src/lib.rs

//! IndexNow notifier library for rugbyaustralia2027.com

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
#[cfg(feature = "server")]
pub mod server;
pub mod services;
pub mod utils;
