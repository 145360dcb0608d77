//! linksweep CLI
//!
//! Removes blacklisted and unreachable links from all published posts in
//! the local post store, logging every removal.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use linksweep::{
    audit,
    error::Result,
    models::Config,
    pipeline,
    services::HttpProbe,
    storage::LocalStore,
    utils::http,
};

/// linksweep - Unreachable Links Cleaner
#[derive(Parser, Debug)]
#[command(
    name = "linksweep",
    version,
    about = "Removes blacklisted and unreachable links from stored posts"
)]
struct Cli {
    /// Path to storage directory containing config and post data
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Remove blacklisted and unreachable links from all published posts
    Run {
        /// Path to the text file containing URLs to remove, one per line
        file: PathBuf,

        /// Optional path for the audit log. If not provided, a timestamped
        /// file is created in the storage directory.
        #[arg(long)]
        log: Option<PathBuf>,
    },

    /// Validate configuration files
    Validate,
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

    log::info!("linksweep starting...");

    let config_path = cli.storage_dir.join("config.toml");
    let config = Config::load_or_default(&config_path);

    match cli.command {
        Command::Run { file, log } => {
            // Resolve the audit log path once, before any processing.
            let log_path = log.unwrap_or_else(|| {
                cli.storage_dir
                    .join(audit::default_log_name(chrono::Utc::now()))
            });

            let store = LocalStore::new(&cli.storage_dir);
            let client = http::create_async_client(&config.http)?;
            let probe = Arc::new(HttpProbe::new(client));

            let stats =
                pipeline::run_cleaner(&config, &store, probe, &file, &log_path).await?;

            log::info!(
                "Success: {} posts processed, {} rewritten in {}s",
                stats.processed,
                stats.rewritten,
                (stats.end_time - stats.start_time).num_seconds()
            );
            log::info!("Removal log written to {}", log_path.display());
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
            log::info!(
                "  page_size={}, page_delay_ms={}, timeout_secs={}",
                config.batch.page_size,
                config.batch.page_delay_ms,
                config.http.timeout_secs
            );
        }
    }

    log::info!("Done!");

    Ok(())
}
