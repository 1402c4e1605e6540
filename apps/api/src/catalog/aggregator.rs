//! Aggregation of synthetic and externally sourced postings into one
//! newest-first catalog. Aggregation never fails: a board that errors
//! contributes nothing and the synthetic batch is always present.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use rand::Rng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::generator::SyntheticGenerator;
use crate::catalog::pools::find_company;
use crate::models::job::{EmploymentType, JobPosting, WorkModality};
use crate::sources::{ExternalPosting, JobSource};

/// Country assumed for external postings; the boards are mostly US/EU.
pub const EXTERNAL_DEFAULT_COUNTRY: &str = "US";

const EXTERNAL_REQUIREMENTS: &[&str] = &[
    "Experience with remote work",
    "Strong communication skills",
    "Self-motivated and proactive",
];

const EXTERNAL_BENEFITS: &[&str] = &[
    "Fully remote position",
    "Flexible working hours",
    "Health insurance",
    "Professional development budget",
];

pub struct Aggregator {
    primary: Arc<dyn JobSource>,
    legacy: Arc<dyn JobSource>,
    generator: SyntheticGenerator,
    merge_legacy: bool,
}

impl Aggregator {
    pub fn new(
        primary: Arc<dyn JobSource>,
        legacy: Arc<dyn JobSource>,
        generator: SyntheticGenerator,
    ) -> Self {
        Self {
            primary,
            legacy,
            generator,
            merge_legacy: false,
        }
    }

    /// Also merge the legacy board's postings. Off by default: they are
    /// fetched either way but historically never reached the catalog.
    pub fn with_legacy_merge(mut self, enabled: bool) -> Self {
        self.merge_legacy = enabled;
        self
    }

    /// Number of external boards queried per aggregation.
    pub fn source_count(&self) -> usize {
        2
    }

    pub async fn fetch_all(&self) -> Vec<JobPosting> {
        self.fetch_all_at(Utc::now()).await
    }

    pub async fn fetch_all_at(&self, now: DateTime<Utc>) -> Vec<JobPosting> {
        let (primary, legacy) = tokio::join!(
            fetch_or_empty(self.primary.as_ref()),
            fetch_or_empty(self.legacy.as_ref())
        );

        let mut jobs = self.generator.generate(now);
        let synthetic = jobs.len();

        let merged = self
            .generator
            .with_rng(|rng| merge_external(&mut jobs, primary, rng));

        let legacy_merged = if self.merge_legacy {
            self.generator
                .with_rng(|rng| merge_external(&mut jobs, legacy, rng))
        } else {
            debug!(
                "{} legacy postings fetched but not merged",
                legacy.len()
            );
            0
        };

        sort_newest_first(&mut jobs);

        info!(
            synthetic,
            merged,
            legacy_merged,
            total = jobs.len(),
            "Aggregated job catalog"
        );
        jobs
    }

    pub async fn jobs_by_country(&self, country: &str) -> Vec<JobPosting> {
        self.fetch_filtered(|j| j.country == country).await
    }

    /// Postings no older than `days` calendar days from now. A window reaching
    /// past the representable range keeps everything.
    pub async fn recent_jobs(&self, days: u32) -> Vec<JobPosting> {
        let cutoff = Duration::try_days(i64::from(days))
            .and_then(|window| Utc::now().checked_sub_signed(window));
        self.fetch_filtered(|j| cutoff.map_or(true, |cutoff| j.posted_at >= cutoff))
            .await
    }

    pub async fn jobs_by_source(&self, source: &str) -> Vec<JobPosting> {
        self.fetch_filtered(|j| j.source == source).await
    }

    pub async fn jobs_by_technology(&self, technology: &str) -> Vec<JobPosting> {
        self.fetch_filtered(|j| j.has_technology(technology)).await
    }

    async fn fetch_filtered(&self, predicate: impl Fn(&JobPosting) -> bool) -> Vec<JobPosting> {
        let mut jobs = self.fetch_all().await;
        jobs.retain(|j| predicate(j));
        jobs
    }
}

async fn fetch_or_empty(source: &dyn JobSource) -> Vec<ExternalPosting> {
    match source.fetch().await {
        Ok(postings) => {
            info!(source = source.name(), count = postings.len(), "Fetched external jobs");
            postings
        }
        Err(e) => {
            warn!(source = source.name(), "Failed to fetch external jobs: {e}");
            Vec::new()
        }
    }
}

/// Appends external postings whose source URL is not already present.
/// First-seen wins, including among the external postings themselves.
/// Returns the number of postings appended.
pub fn merge_external<R: Rng + ?Sized>(
    jobs: &mut Vec<JobPosting>,
    external: Vec<ExternalPosting>,
    rng: &mut R,
) -> usize {
    let mut seen: HashSet<String> = jobs.iter().map(|j| j.source_url.clone()).collect();
    let before = jobs.len();

    for posting in external {
        if seen.contains(&posting.source_url) {
            continue;
        }
        if let Some(job) = map_external(posting, rng) {
            seen.insert(job.source_url.clone());
            jobs.push(job);
        }
    }

    jobs.len() - before
}

/// Fills in the fields external boards do not carry. Postings from unknown
/// companies or with unreadable timestamps are dropped.
fn map_external<R: Rng + ?Sized>(posting: ExternalPosting, rng: &mut R) -> Option<JobPosting> {
    let Some(company) = find_company(&posting.company) else {
        debug!(company = %posting.company, "Dropping external posting from unknown company");
        return None;
    };
    let Some(posted_at) = parse_timestamp(&posting.posted_at) else {
        debug!(url = %posting.source_url, raw = %posting.posted_at, "Dropping external posting with bad timestamp");
        return None;
    };

    Some(JobPosting {
        id: format!("api-{}-{}", source_slug(&posting.source), Uuid::new_v4()),
        title: posting.title,
        company: posting.company,
        logo: company.logo.to_string(),
        location: posting.location,
        country: EXTERNAL_DEFAULT_COUNTRY.to_string(),
        employment_type: EmploymentType::FullTime,
        modality: WorkModality::Remote,
        salary: format!("$ {}.000/yr", rng.gen_range(80..180)),
        description: posting.description,
        requirements: EXTERNAL_REQUIREMENTS.iter().map(|s| s.to_string()).collect(),
        benefits: EXTERNAL_BENEFITS.iter().map(|s| s.to_string()).collect(),
        technologies: posting.technologies,
        source: posting.source,
        source_url: posting.source_url,
        posted_at,
        urgent: false,
        views: rng.gen_range(50..1050),
    })
}

/// Accepts RFC 3339, zone-less ISO-8601 (read as UTC), and the legacy
/// `Wed Jan 15 10:00:00 UTC 2020` format.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%a %b %d %H:%M:%S UTC %Y"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn source_slug(source: &str) -> String {
    source
        .split(|c: char| !c.is_ascii_alphanumeric())
        .find(|part| !part.is_empty())
        .unwrap_or("external")
        .to_ascii_lowercase()
}

/// Stable: postings with equal timestamps keep their relative order.
pub fn sort_newest_first(jobs: &mut [JobPosting]) {
    jobs.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
}
