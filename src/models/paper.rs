use serde::{Deserialize, Serialize};

/// Normalized paper record, written to `<data-root>/<conference>/<year>.json`.
///
/// Field order here is the key order in the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub topic: String,
    pub conference: String,
    pub year: i32,
    pub paper_url: String,
}
