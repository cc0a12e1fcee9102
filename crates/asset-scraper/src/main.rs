//! Wiki asset scraper CLI application.

use anyhow::{Context, Result};
use asset_scraper::{catalog, download, media, Category, WikiClient};
use clap::Parser;
use shared::{Config, DataPaths};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Category to process; all four are processed in order when omitted
    #[arg(value_enum)]
    category: Option<Category>,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Initialize logging
    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    shared::logging::init(shared::LogConfig {
        log_dir: config.log_dir().to_string_lossy().to_string(),
        component: "asset-scraper".to_string(),
        default_level: log_level,
        console: true,
        file: true,
        json_format: false,
    })?;

    info!("Asset scraper starting");
    info!(config_file = %args.config.display(), "Loaded configuration");

    // Initialize data paths
    let data_paths = DataPaths::new(config.data_dir());
    data_paths
        .create_dirs()
        .context("Failed to create data directories")?;

    // Initialize API client
    let client = WikiClient::new(
        config.scraper.base_url.clone(),
        &config.scraper.user_agent,
        Duration::from_secs(config.scraper.timeout_seconds),
        config.scraper.query_page_size,
    )
    .context("Failed to create wiki client")?;

    let categories: Vec<Category> = match args.category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        process_category(&client, &data_paths, &config, category)
            .await
            .with_context(|| format!("Failed to process category {}", category))?;
    }

    info!("Asset scraper finished successfully");

    Ok(())
}

/// Run the full pipeline for one category
async fn process_category(
    client: &WikiClient,
    paths: &DataPaths,
    config: &Config,
    category: Category,
) -> Result<()> {
    info!(category = %category, "Processing category");

    let catalog = catalog::build(client, category).await?;
    let media = media::list(client, category).await?;
    let stats = download::download_all(
        client,
        category,
        &catalog,
        media,
        paths,
        config.scraper.max_concurrent_downloads,
    )
    .await?;

    info!("=== Category {} complete ===", category);
    info!("Catalog entries: {}", catalog.len());
    info!("Downloaded: {}", stats.downloaded);
    info!("Skipped (unresolved): {}", stats.skipped_unresolved);
    info!("Skipped (HTTP): {}", stats.skipped_http);
    info!("Failed: {}", stats.failed);

    Ok(())
}
