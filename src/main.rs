//! Coursemap main entry point
//!
//! Runs the full crawl pipeline in its fixed phase order: track listing,
//! tracks, courses from tracks, then prerequisite courses to a fixed point.

use clap::Parser;
use coursemap::config::{load_config, Config};
use coursemap::crawler::{HttpRenderer, Orchestrator};
use coursemap::store::FsStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Coursemap: a learning-catalog crawler for datacamp.com
///
/// Scrapes the career-track listing, every track, every course the tracks
/// reference and every course reachable through prerequisite links, and
/// persists each as a JSON artifact.
#[derive(Parser, Debug)]
#[command(name = "coursemap")]
#[command(version = "1.0.0")]
#[command(about = "A learning-catalog crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (all settings have defaults)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    tracing::info!(
        "Crawling {} into {}",
        config.site.listing_url,
        config.storage.data_dir
    );

    let store = FsStore::new(&config.storage.data_dir);
    let renderer = HttpRenderer::new(&config.renderer)?;
    let orchestrator = Orchestrator::new(renderer, store, config.site.listing_url.clone());

    match orchestrator.run().await {
        Ok(()) => {
            tracing::info!("Crawl completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("coursemap=info,warn"),
            1 => EnvFilter::new("coursemap=debug,info"),
            2 => EnvFilter::new("coursemap=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
