//! Paper record normalization.
//!
//! Conference listing APIs return loosely shaped JSON objects. This module maps
//! one raw record onto the fixed [`Paper`] schema:
//! - Each output field reads an ordered list of source keys; the first present key wins
//! - A key is present when it exists, even if its value is `null`
//! - Strings are copied verbatim, numbers and booleans are rendered as text
//! - `null`, arrays, and objects become the empty string

use serde_json::Value;

use crate::models::Paper;

/// Normalize a raw listing record for the given conference and year.
///
/// Never fails: missing or oddly typed fields become empty strings, and a
/// missing author list becomes empty.
///
/// # Examples
///
/// ```
/// use confpapers::utils::normalize_paper;
/// use serde_json::json;
///
/// let raw = json!({ "uid": "p1", "name": "Deep Learning", "title": "ignored" });
/// let paper = normalize_paper(&raw, "NeurIPS", 2024);
/// assert_eq!(paper.id, "p1");
/// assert_eq!(paper.title, "Deep Learning");
/// assert!(paper.authors.is_empty());
/// ```
pub fn normalize_paper(raw: &Value, conference: &str, year: i32) -> Paper {
    Paper {
        id: field(raw, &["uid"]),
        title: field(raw, &["name", "title"]),
        authors: author_names(raw),
        abstract_text: field(raw, &["abstract"]),
        topic: field(raw, &["topic"]),
        conference: conference.to_string(),
        year,
        paper_url: field(raw, &["paper_pdf_url", "paper_url"]),
    }
}

/// Resolve the first key in `keys` that exists, in order.
///
/// An existing key ends the lookup even when its value has no text form.
///
/// # Examples
///
/// ```
/// use confpapers::utils::first_present;
/// use serde_json::json;
///
/// let raw = json!({ "paper_url": "b", "paper_pdf_url": null });
/// assert_eq!(first_present(&raw, &["paper_pdf_url", "paper_url"]), Some(String::new()));
/// assert_eq!(first_present(&raw, &["paper_url"]), Some("b".to_string()));
/// assert_eq!(first_present(&raw, &["topic"]), None);
/// ```
pub fn first_present(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| raw.get(*key))
        .map(|value| scalar_text(value).unwrap_or_default())
}

fn field(raw: &Value, keys: &[&str]) -> String {
    first_present(raw, keys).unwrap_or_default()
}

/// One entry per element of `authors`, each element's `fullname` or "".
fn author_names(raw: &Value) -> Vec<String> {
    match raw.get("authors") {
        Some(Value::Array(authors)) => authors
            .iter()
            .map(|author| field(author, &["fullname"]))
            .collect(),
        _ => Vec::new(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // null and nested structures have no text form
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
