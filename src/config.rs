//! Conference list loading and validation.

use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::models::ConferenceConfig;
use crate::utils::YEAR_PLACEHOLDER;

/// Load the conference list from a JSON file.
///
/// The file holds an array of `{ "name", "url_template", "years" }` objects.
/// A missing, malformed, or invalid file is an error; callers treat it as fatal.
pub fn load_conferences(path: &Path) -> Result<Vec<ConferenceConfig>> {
    info!("Loading config from {}...", path.display());

    let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let conferences: Vec<ConferenceConfig> =
        serde_json::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

    for conf in &conferences {
        validate(conf)?;
    }

    Ok(conferences)
}

fn validate(conf: &ConferenceConfig) -> Result<()> {
    // The name becomes a directory under the data root
    let name = conf.name.as_str();
    if name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
    {
        return Err(Error::InvalidConfig(format!(
            "conference name {:?} cannot be used as a directory name",
            name
        )));
    }

    if !conf.url_template.contains(YEAR_PLACEHOLDER) {
        return Err(Error::InvalidConfig(format!(
            "url_template for {} has no {} placeholder",
            name, YEAR_PLACEHOLDER
        )));
    }

    Ok(())
}
