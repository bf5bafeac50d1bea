//! Zipserve server binary
//!
//! Loads the zip-code CSV dataset, builds the city index and serves
//! lookups over HTTP (or HTTPS when TLS is configured). A dataset load
//! failure aborts the process before the listener is opened.
//!
//! # Configuration
//!
//! A TOML config file (`--config`, or the default search locations)
//! with environment overrides:
//! - `ZIPSERVE_HOST`, `ZIPSERVE_PORT`, `ZIPSERVE_PREFIX`
//! - `ZIPSERVE_TLS_CERT`, `ZIPSERVE_TLS_KEY`
//! - `ZIPSERVE_CSV`
//! - `ZIPSERVE_LOG_LEVEL`, `ZIPSERVE_LOG_FORMAT`
//! - `RUST_LOG` (overrides the log level)

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zipserve::api::{serve, AppState};
use zipserve::config::Config;
use zipserve::dataset::ZipLoader;
use zipserve::index::CityIndex;

#[derive(Parser, Debug)]
#[command(name = "zipserve", version, about = "Zip-code-by-city lookup service")]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the zip-code CSV file (overrides config)
    #[arg(long)]
    csv: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("failed to load config from {path:?}"))?,
        None => Config::load_default(),
    };
    if let Some(csv) = args.csv {
        config.dataset.csv_path = csv;
    }

    init_tracing(&config);

    tracing::info!("Starting zipserve v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset: {}", config.dataset.csv_path);

    // Blocking, one-time startup phase: the server must not accept
    // requests until the full index is built. Any load error aborts
    // the process with a non-zero exit status.
    let zips = ZipLoader::new()
        .with_expected_records(config.dataset.expected_records)
        .load(&config.dataset.csv_path)
        .context("failed to load zip dataset")?;

    tracing::info!("loaded {} zips", zips.len());

    let index = Arc::new(CityIndex::build(zips));
    let stats = index.stats();
    tracing::info!(
        "indexed {} records across {} cities",
        stats.records,
        stats.cities
    );

    let state = AppState::new(index, config.server.clone());
    serve(state, &config.server)
        .await
        .context("server error")?;

    tracing::info!("zipserve stopped");
    Ok(())
}

/// Initialize the tracing subscriber from the logging config.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(format!(
                "zipserve={},tower_http=warn",
                config.logging.level
            ))
        });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
