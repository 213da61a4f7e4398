//! IndexNow CLI
//!
//! Submits site URLs to the IndexNow endpoints. For the HTTP API, use
//! `indexnow-server`.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use indexnow::{config, error::Result, pipeline, services::UrlNotifier, utils::console};

/// IndexNow notifier for rugbyaustralia2027.com
///
/// Without a mode flag, every known page is submitted in batches.
#[derive(Parser, Debug)]
#[command(name = "indexnow", version, about)]
#[command(group(ArgGroup::new("mode").args(["url", "recent", "verify", "list"])))]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Submit exactly one URL (absolute or site-relative)
    #[arg(long, value_name = "PATH")]
    url: Option<String>,

    /// Submit the fixed set of frequently updated pages
    #[arg(long)]
    recent: bool,

    /// Check that the key file is served correctly
    #[arg(long)]
    verify: bool,

    /// Print every site URL without submitting
    #[arg(long)]
    list: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Only print failures
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    console::set_quiet(cli.quiet);

    let config = config::load(&cli.config)?;

    log::debug!("Loaded configuration from {}", cli.config.display());

    let notifier = UrlNotifier::from_config(&config)?;

    if let Some(url) = cli.url {
        pipeline::run_submit_url(&notifier, &url).await?;
    } else if cli.recent {
        pipeline::run_submit_recent(&notifier).await?;
    } else if cli.verify {
        // Diagnostic only: the exit status does not depend on the answer
        pipeline::run_verify(&notifier).await;
    } else if cli.list {
        pipeline::run_list(&notifier, &config.content);
    } else {
        pipeline::run_submit_all(&notifier, &config.content).await?;
    }

    Ok(())
}
