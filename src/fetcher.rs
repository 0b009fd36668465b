//! HTTP retrieval of conference paper listings.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

/// Per-request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure, timeout, or body read failure
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("server returned {0}")]
    Status(#[source] reqwest::Error),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON without a usable `results` array
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

/// Fetch the raw records listed under `results` at `url`.
///
/// A body without a `results` key yields an empty list.
pub async fn try_fetch_papers(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<Vec<Value>, FetchError> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(FetchError::Request)?
        .error_for_status()
        .map_err(FetchError::Status)?;

    let body = response.bytes().await.map_err(FetchError::Request)?;
    let document: Value = serde_json::from_slice(&body)?;

    match document {
        Value::Object(mut map) => match map.remove("results") {
            None => Ok(Vec::new()),
            Some(Value::Array(results)) => Ok(results),
            Some(other) => Err(FetchError::Shape(format!(
                "\"results\" is {}, expected an array",
                json_kind(&other)
            ))),
        },
        other => Err(FetchError::Shape(format!(
            "top-level value is {}, expected an object",
            json_kind(&other)
        ))),
    }
}

/// Fetch a listing, logging and swallowing any failure.
///
/// An empty list is the only failure signal, so callers cannot tell a
/// failed request from a listing with zero papers.
pub async fn fetch_papers(client: &reqwest::Client, url: &str, timeout: Duration) -> Vec<Value> {
    info!("Fetching from {}...", url);

    match try_fetch_papers(client, url, timeout).await {
        Ok(papers) => papers,
        Err(e @ (FetchError::Parse(_) | FetchError::Shape(_))) => {
            error!("  -> Failed to parse JSON from {}: {}", url, e);
            Vec::new()
        }
        Err(e) => {
            error!("  -> Failed to fetch {}: {}", url, e);
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
