// src/server/mod.rs

//! HTTP surface: the submission API and the key file.

pub mod routes;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::services::UrlNotifier;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub notifier: Arc<UrlNotifier>,
}

/// Build the application router.
///
/// The key file route is registered at `/{key}.txt` for the configured key.
pub fn router(notifier: Arc<UrlNotifier>) -> Router {
    let key_path = notifier.site().key_file_path();
    let state = AppState { notifier };

    Router::new()
        .route(
            "/api/indexnow",
            get(routes::status).post(routes::submit),
        )
        .route(&key_path, get(routes::key_file))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
