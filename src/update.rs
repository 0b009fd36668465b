//! Fetch, normalize, and save every configured (conference, year) listing.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures::future::join_all;
use tracing::{info, warn};

use crate::config::load_conferences;
use crate::error::{Error, Result};
use crate::fetcher::{fetch_papers, DEFAULT_TIMEOUT};
use crate::models::{ConferenceConfig, FetchTarget, Paper};
use crate::utils::{build_targets, normalize_paper, output_path};

#[derive(Debug, Clone)]
pub struct UpdateOptions {
    /// Root directory for `<conference>/<year>.json` files
    pub data_dir: PathBuf,
    /// Per-request timeout
    pub timeout: Duration,
    /// Fetch and normalize, but write nothing
    pub dry_run: bool,
    /// Only this conference (case-insensitive)
    pub venue: Option<String>,
    /// Only this year
    pub year: Option<i32>,
}

impl UpdateOptions {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            timeout: DEFAULT_TIMEOUT,
            dry_run: false,
            venue: None,
            year: None,
        }
    }
}

/// A listing written (or, in a dry run, due to be written) to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedOutput {
    pub target: FetchTarget,
    pub path: PathBuf,
    pub count: usize,
}

/// Outcome of one update run, in target order
#[derive(Debug, Default)]
pub struct UpdateSummary {
    pub saved: Vec<SavedOutput>,
    /// Targets whose fetch came back empty, whether from failure or no papers
    pub skipped: Vec<FetchTarget>,
}

/// Load the conference list at `config_path` and run a full update with a fresh client.
pub async fn update_all(config_path: &Path, options: &UpdateOptions) -> Result<UpdateSummary> {
    let conferences = load_conferences(config_path)?;
    let client = reqwest::Client::builder().build().map_err(Error::HttpClient)?;

    run_update(&client, &conferences, options).await
}

/// Fetch every target concurrently, then normalize and save the non-empty listings.
///
/// Fetch failures only cause the affected pair to be skipped. Write failures
/// abort the run.
pub async fn run_update(
    client: &reqwest::Client,
    conferences: &[ConferenceConfig],
    options: &UpdateOptions,
) -> Result<UpdateSummary> {
    let targets = build_targets(conferences, options.venue.as_deref(), options.year);
    if targets.is_empty() {
        warn!("No conference years match the requested filters");
    }

    // join_all yields results in launch order, so they zip back onto targets
    let results = join_all(
        targets
            .iter()
            .map(|target| fetch_papers(client, &target.url, options.timeout)),
    )
    .await;

    let mut summary = UpdateSummary::default();

    for (target, raw_papers) in targets.into_iter().zip(results) {
        if raw_papers.is_empty() {
            warn!("  -> No data found for {} {}. Skipping.", target.conference, target.year);
            summary.skipped.push(target);
            continue;
        }

        let papers: Vec<Paper> = raw_papers
            .iter()
            .map(|raw| normalize_paper(raw, &target.conference, target.year))
            .collect();

        let path = output_path(&options.data_dir, &target.conference, target.year);
        if options.dry_run {
            info!("[dry run] Would save {} items to {}", papers.len(), path.display());
        } else {
            save_papers(&papers, &path)?;
        }

        summary.saved.push(SavedOutput {
            target,
            path,
            count: papers.len(),
        });
    }

    info!(
        "Data update process completed successfully! ({} saved, {} skipped)",
        summary.saved.len(),
        summary.skipped.len()
    );

    Ok(summary)
}

/// Write papers as a pretty-printed JSON array, replacing any existing file.
pub fn save_papers(papers: &[Paper], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_vec_pretty(papers)?;
    std::fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Saved {} items to {}", papers.len(), path.display());
    Ok(())
}
