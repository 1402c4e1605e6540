use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::{get_json, non_blank, ExternalPosting, JobSource, SourceError};

pub const SOURCE_NAME: &str = "GitHub Jobs";
pub const DEFAULT_URL: &str = "https://jobs.github.com/positions.json";

#[derive(Debug, Deserialize)]
struct GithubJob {
    title: Option<String>,
    company: Option<String>,
    description: Option<String>,
    location: Option<String>,
    url: Option<String>,
    created_at: Option<String>,
}

/// Client for the legacy GitHub Jobs positions feed (a bare JSON array).
pub struct GithubJobsSource {
    client: Client,
    url: String,
}

impl GithubJobsSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl JobSource for GithubJobsSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch(&self) -> Result<Vec<ExternalPosting>, SourceError> {
        let jobs: Vec<Value> = get_json(&self.client, &self.url).await?;
        Ok(map_jobs(jobs))
    }
}

/// Records that do not match the expected shape are skipped one by one.
fn map_jobs(jobs: Vec<Value>) -> Vec<ExternalPosting> {
    jobs.into_iter()
        .filter_map(|raw| {
            let job: GithubJob = serde_json::from_value(raw).ok()?;
            Some(ExternalPosting {
                title: non_blank(job.title)?,
                company: non_blank(job.company)?,
                source_url: non_blank(job.url)?,
                posted_at: non_blank(job.created_at)?,
                description: job.description.unwrap_or_default(),
                location: job.location.unwrap_or_default(),
                technologies: Vec::new(),
                source: SOURCE_NAME.to_string(),
            })
        })
        .collect()
}
