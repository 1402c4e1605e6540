//! Pure view computations over a catalog: filtering, pagination and stats.
//! Nothing here does I/O.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::filter::FilterCriteria;
use crate::models::job::{posted_label, JobPosting};

pub mod filter;
pub mod freshness;
pub mod pagination;
pub mod session;
pub mod stats;

use pagination::Pagination;
use stats::{compute_stats, CatalogStats};

/// A posting as shown on a card or in the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct JobView {
    #[serde(flatten)]
    pub job: JobPosting,
    pub days_since_posted: i64,
    pub posted_label: String,
}

impl JobView {
    pub fn new(job: &JobPosting, now: DateTime<Utc>) -> Self {
        let days = job.days_since_posted(now);
        Self {
            job: job.clone(),
            days_since_posted: days,
            posted_label: posted_label(days),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub jobs: Vec<JobView>,
    pub pagination: Pagination,
    pub stats: CatalogStats,
}

/// Filters `jobs`, computes stats over the matches and returns the requested
/// page (clamped into range).
pub fn build_page(
    jobs: &[JobPosting],
    criteria: &FilterCriteria,
    page: usize,
    now: DateTime<Utc>,
) -> PageView {
    let matches = filter::apply(jobs, criteria, now);
    let pagination = Pagination::new(matches.len(), page);
    let stats = compute_stats(matches.iter().copied());
    let jobs = pagination
        .slice(&matches)
        .iter()
        .map(|job| JobView::new(job, now))
        .collect();

    PageView {
        jobs,
        pagination,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use crate::models::job::fixtures::posting;

    fn catalog(n: usize, now: DateTime<Utc>) -> Vec<JobPosting> {
        (0..n)
            .map(|i| posting(&format!("job-{i}"), now - Duration::hours(i as i64)))
            .collect()
    }

    #[test]
    fn test_last_page_of_twenty_five() {
        let now = Utc::now();
        let jobs = catalog(25, now);
        let view = build_page(&jobs, &FilterCriteria::default(), 4, now);

        assert_eq!(view.pagination.page, 3);
        assert_eq!(view.pagination.total_pages, 3);
        assert_eq!(view.jobs.len(), 1);
        assert_eq!(view.jobs[0].job.id, "job-24");
        assert_eq!(view.stats.total, 25);
    }

    #[test]
    fn test_stats_follow_filtered_set() {
        let now = Utc::now();
        let jobs = catalog(5, now);
        let criteria = FilterCriteria {
            search: "no such thing".to_string(),
            ..Default::default()
        };
        let view = build_page(&jobs, &criteria, 1, now);

        assert!(view.jobs.is_empty());
        assert_eq!(view.stats.total, 0);
        assert_eq!(view.stats.avg_views, 0);
    }

    #[test]
    fn test_job_view_serializes_flat() {
        let now = Utc::now();
        let job = posting("a", now - Duration::days(1));
        let json = serde_json::to_value(JobView::new(&job, now)).unwrap();
        assert_eq!(json["id"], "a");
        assert_eq!(json["days_since_posted"], 1);
        assert_eq!(json["posted_label"], "Yesterday");
    }
}
