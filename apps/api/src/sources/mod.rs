//! External job boards. Every board sits behind `JobSource` so the aggregator
//! can be driven by fakes in tests and new boards can be added without
//! touching the merge logic.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod github;
pub mod remotive;

pub use github::GithubJobsSource;
pub use remotive::RemotiveSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A listing as reported by an external board, before it is filled in with
/// the fields the board does not carry (country, type, salary...).
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalPosting {
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub technologies: Vec<String>,
    pub source: String,
    pub source_url: String,
    /// Raw timestamp string; boards disagree on the format.
    pub posted_at: String,
}

#[async_trait]
pub trait JobSource: Send + Sync {
    /// Display name stamped on every posting from this board.
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<Vec<ExternalPosting>, SourceError>;
}

/// GET `url` and decode the JSON body. Non-2xx responses become `SourceError::Api`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<T, SourceError> {
    let resp = client.get(url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SourceError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Returns the value when present and non-blank.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
