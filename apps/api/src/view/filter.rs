use chrono::{DateTime, Utc};

use crate::models::filter::FilterCriteria;
use crate::models::job::JobPosting;

/// Compiled form of `FilterCriteria`: the search needle is lowercased once.
pub struct Matcher<'c> {
    criteria: &'c FilterCriteria,
    needle: String,
    now: DateTime<Utc>,
}

impl<'c> Matcher<'c> {
    pub fn new(criteria: &'c FilterCriteria, now: DateTime<Utc>) -> Self {
        Self {
            criteria,
            needle: criteria.search.to_lowercase(),
            now,
        }
    }

    pub fn matches(&self, job: &JobPosting) -> bool {
        let c = self.criteria;
        self.matches_search(job)
            && c.country.as_ref().map_or(true, |v| &job.country == v)
            && c.employment_type.map_or(true, |v| job.employment_type == v)
            && c.modality.map_or(true, |v| job.modality == v)
            && c.technology.as_ref().map_or(true, |v| job.has_technology(v))
            && c.source.as_ref().map_or(true, |v| &job.source == v)
            && c.days_ago
                .map_or(true, |window| job.days_since_posted(self.now) <= i64::from(window))
    }

    fn matches_search(&self, job: &JobPosting) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        job.title.to_lowercase().contains(&self.needle)
            || job.company.to_lowercase().contains(&self.needle)
            || job
                .technologies
                .iter()
                .any(|t| t.to_lowercase().contains(&self.needle))
    }
}

/// Postings matching every selector, in catalog order.
pub fn apply<'a>(
    jobs: &'a [JobPosting],
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> Vec<&'a JobPosting> {
    let matcher = Matcher::new(criteria, now);
    jobs.iter().filter(|j| matcher.matches(j)).collect()
}
