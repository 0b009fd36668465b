use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use confpapers::{update_all, UpdateOptions};

/// Crate directory; default config and data paths live under it
const PROJECT_ROOT: &str = env!("CARGO_MANIFEST_DIR");

#[derive(Parser, Debug)]
#[command(name = "confpapers")]
#[command(about = "Fetch conference paper listings and save them as normalized JSON")]
struct Args {
    /// Conference list (JSON array of {name, url_template, years})
    #[arg(long, env = "CONFPAPERS_CONFIG")]
    config: Option<PathBuf>,

    /// Output root; files land at <data-dir>/<conference>/<year>.json
    #[arg(long, env = "CONFPAPERS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Per-request timeout in seconds (at least 1)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Only update this conference
    #[arg(short, long)]
    venue: Option<String>,

    /// Only update this year
    #[arg(short, long)]
    year: Option<i32>,

    /// Dry run - fetch and normalize but don't write files
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let root = PathBuf::from(PROJECT_ROOT);
    let config_path = args
        .config
        .unwrap_or_else(|| root.join("configs").join("conferences.json"));

    let options = UpdateOptions {
        data_dir: args.data_dir.unwrap_or_else(|| root.join("data")),
        timeout: Duration::from_secs(args.timeout_secs),
        dry_run: args.dry_run,
        venue: args.venue,
        year: args.year,
    };

    update_all(&config_path, &options)
        .await
        .context("Data update failed")?;

    Ok(())
}
