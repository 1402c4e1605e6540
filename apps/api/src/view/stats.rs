use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::models::job::JobPosting;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub countries: usize,
    pub sources: usize,
    /// Rounded mean of `views`; 0 for an empty set.
    pub avg_views: u64,
}

pub fn compute_stats<'a, I>(jobs: I) -> CatalogStats
where
    I: IntoIterator<Item = &'a JobPosting>,
{
    let mut countries = HashSet::new();
    let mut sources = HashSet::new();
    let mut total = 0usize;
    let mut views = 0u64;

    for job in jobs {
        total += 1;
        views += u64::from(job.views);
        countries.insert(job.country.as_str());
        sources.insert(job.source.as_str());
    }

    let avg_views = if total == 0 {
        0
    } else {
        (views as f64 / total as f64).round() as u64
    };

    CatalogStats {
        total,
        countries: countries.len(),
        sources: sources.len(),
        avg_views,
    }
}

/// Sorted union of every technology tag in the catalog.
pub fn distinct_technologies(jobs: &[JobPosting]) -> Vec<String> {
    jobs.iter()
        .flat_map(|j| j.technologies.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
