//! Conference target utilities
//!
//! Every configured conference expands into one fetch per listed year. The
//! listing URL comes from the conference's template and the output lands at
//! `<data-root>/<conference>/<year>.json`.

use std::path::{Path, PathBuf};

use crate::models::{ConferenceConfig, FetchTarget};

/// Placeholder substituted with the year in URL templates
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Format a URL template for one year
///
/// # Examples
/// ```
/// use confpapers::utils::format_url;
///
/// assert_eq!(format_url("http://api/{year}", 2023), "http://api/2023");
/// assert_eq!(
///     format_url("https://x/{year}/data-{year}.json", 2024),
///     "https://x/2024/data-2024.json"
/// );
/// ```
pub fn format_url(template: &str, year: i32) -> String {
    template.replace(YEAR_PLACEHOLDER, &year.to_string())
}

/// Expand conference entries into fetch targets, in configuration order
///
/// `venue` matches the conference name case-insensitively; `year` keeps only
/// that year. `None` keeps everything.
pub fn build_targets(
    conferences: &[ConferenceConfig],
    venue: Option<&str>,
    year: Option<i32>,
) -> Vec<FetchTarget> {
    conferences
        .iter()
        .filter(|conf| venue.map_or(true, |v| conf.name.eq_ignore_ascii_case(v)))
        .flat_map(|conf| {
            conf.years
                .iter()
                .filter(move |y| year.map_or(true, |wanted| **y == wanted))
                .map(move |&y| FetchTarget {
                    conference: conf.name.clone(),
                    year: y,
                    url: format_url(&conf.url_template, y),
                })
        })
        .collect()
}

/// Output file for one (conference, year) pair
///
/// # Examples
/// ```
/// use confpapers::utils::output_path;
/// use std::path::Path;
///
/// assert_eq!(
///     output_path(Path::new("data"), "ICML", 2023),
///     Path::new("data").join("ICML").join("2023.json")
/// );
/// ```
pub fn output_path(data_dir: &Path, conference: &str, year: i32) -> PathBuf {
    data_dir.join(conference).join(format!("{}.json", year))
}
