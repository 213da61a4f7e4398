//! IndexNow HTTP server
//!
//! Serves `POST/GET /api/indexnow` and the `/{key}.txt` ownership file.

use std::path::PathBuf;
use std::sync::Arc;

use indexnow::{config, error::Result, server, services::UrlNotifier};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the server.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config_path = std::env::var(config::CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(config::DEFAULT_CONFIG_PATH));
    let config = config::load(&config_path)?;

    let notifier = Arc::new(UrlNotifier::from_config(&config)?);
    info!(
        "Key file will be served at {}",
        notifier.site().key_location()
    );

    let app = server::router(notifier);
    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!("IndexNow server listening on {}", config.server.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// JSON logs when `LOG_FORMAT=json`, human-readable otherwise.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|f| f == "json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
