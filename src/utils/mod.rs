//! Utility functions and helpers.

pub mod console;
pub mod http;
pub mod url;

pub use url::{normalize, normalize_all};
