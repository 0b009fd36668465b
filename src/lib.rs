pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod update;
pub mod utils;

pub use config::load_conferences;
pub use error::{Error, Result};
pub use fetcher::{fetch_papers, try_fetch_papers, FetchError, DEFAULT_TIMEOUT};
pub use models::{ConferenceConfig, FetchTarget, Paper};
pub use update::{run_update, save_papers, update_all, SavedOutput, UpdateOptions, UpdateSummary};
pub use utils::{build_targets, format_url, normalize_paper, output_path};
