use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{get_json, non_blank, ExternalPosting, JobSource, SourceError};

pub const SOURCE_NAME: &str = "Remotive.io";
pub const DEFAULT_URL: &str = "https://remotive.io/api/remote-jobs";

#[derive(Debug, Deserialize)]
struct RemotiveResponse {
    /// Kept raw so one malformed record only drops itself.
    #[serde(default)]
    jobs: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RemotiveJob {
    title: Option<String>,
    company_name: Option<String>,
    description: Option<String>,
    candidate_required_location: Option<String>,
    tags: Option<Vec<String>>,
    url: Option<String>,
    publication_date: Option<String>,
}

/// Client for the public Remotive remote-jobs feed.
pub struct RemotiveSource {
    client: Client,
    url: String,
}

impl RemotiveSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl JobSource for RemotiveSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch(&self) -> Result<Vec<ExternalPosting>, SourceError> {
        let response: RemotiveResponse = get_json(&self.client, &self.url).await?;
        Ok(map_response(response))
    }
}

fn map_response(response: RemotiveResponse) -> Vec<ExternalPosting> {
    let total = response.jobs.len();
    let postings: Vec<ExternalPosting> = response
        .jobs
        .into_iter()
        .filter_map(|raw| {
            let job: RemotiveJob = serde_json::from_value(raw).ok()?;
            Some(ExternalPosting {
                title: non_blank(job.title)?,
                company: non_blank(job.company_name)?,
                source_url: non_blank(job.url)?,
                posted_at: non_blank(job.publication_date)?,
                description: job.description.unwrap_or_default(),
                location: non_blank(job.candidate_required_location)
                    .unwrap_or_else(|| "Remote".to_string()),
                technologies: job.tags.unwrap_or_default(),
                source: SOURCE_NAME.to_string(),
            })
        })
        .collect();

    debug!(
        "Remotive returned {} jobs, {} usable",
        total,
        postings.len()
    );
    postings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Vec<ExternalPosting> {
        map_response(serde_json::from_str(body).unwrap())
    }

    #[test]
    fn test_maps_remotive_payload() {
        let body = r#"{
            "job-count": 1,
            "jobs": [{
                "id": 1,
                "title": "Senior Rust Engineer",
                "company_name": "Stripe",
                "description": "<p>Payments</p>",
                "candidate_required_location": "USA",
                "tags": ["rust", "aws"],
                "url": "https://remotive.com/remote-jobs/software-dev/rust-1",
                "publication_date": "2025-02-01T10:30:00"
            }]
        }"#;

        let postings = parse(body);
        assert_eq!(postings.len(), 1);
        let p = &postings[0];
        assert_eq!(p.company, "Stripe");
        assert_eq!(p.location, "USA");
        assert_eq!(p.technologies, vec!["rust", "aws"]);
        assert_eq!(p.source, SOURCE_NAME);
        assert_eq!(p.posted_at, "2025-02-01T10:30:00");
    }

    #[test]
    fn test_defaults_location_and_tags() {
        let body = r#"{"jobs": [{
            "title": "Designer",
            "company_name": "Vercel",
            "candidate_required_location": "",
            "url": "https://remotive.com/x",
            "publication_date": "2025-02-01T10:30:00"
        }]}"#;

        let postings = parse(body);
        assert_eq!(postings[0].location, "Remote");
        assert!(postings[0].technologies.is_empty());
        assert_eq!(postings[0].description, "");
    }

    #[test]
    fn test_drops_records_without_url() {
        let body = r#"{"jobs": [
            {"title": "A", "company_name": "Meta", "publication_date": "2025-02-01T10:30:00"},
            {"title": "B", "company_name": "Meta", "url": "https://remotive.com/b", "publication_date": "2025-02-01T10:30:00"}
        ]}"#;

        let postings = parse(body);
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].title, "B");
    }

    #[test]
    fn test_mistyped_record_is_dropped_alone() {
        let body = r#"{"jobs": [
            {"title": 42, "company_name": "Meta", "url": "https://remotive.com/a", "publication_date": "2025-02-01T10:30:00"},
            {"title": "B", "company_name": "Meta", "tags": "rust", "url": "https://remotive.com/b", "publication_date": "2025-02-01T10:30:00"},
            {"title": "C", "company_name": "Meta", "url": "https://remotive.com/c", "publication_date": "2025-02-01T10:30:00"}
        ]}"#;

        let postings = parse(body);
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].title, "C");
    }

    #[test]
    fn test_missing_jobs_array_is_empty() {
        assert!(parse("{}").is_empty());
    }
}
