use serde::Deserialize;

/// One conference's listing source, as read from the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConferenceConfig {
    /// Conference name, also used as the output directory name (e.g., NeurIPS)
    pub name: String,
    /// Listing URL with a `{year}` placeholder
    pub url_template: String,
    /// Years to fetch, in order
    pub years: Vec<i32>,
}

/// A single (conference, year) fetch, with its URL already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTarget {
    pub conference: String,
    pub year: i32,
    pub url: String,
}
