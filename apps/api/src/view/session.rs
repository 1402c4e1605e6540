use chrono::{DateTime, Utc};

use crate::models::filter::FilterCriteria;
use crate::models::job::JobPosting;
use crate::view::pagination::{clamp_page, total_pages};
use crate::view::{build_page, filter, PageView};

/// Browsing state for one viewer: the active criteria and current page.
/// Page moves are clamped, and any change of criteria returns to page 1.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    criteria: FilterCriteria,
    page: usize,
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
        }
    }
}

impl BrowseSession {
    #[allow(dead_code)]
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.criteria = criteria;
            self.page = 1;
        }
    }

    pub fn go_to(&mut self, page: usize, jobs: &[JobPosting], now: DateTime<Utc>) {
        self.page = clamp_page(page, self.total_pages(jobs, now));
    }

    #[allow(dead_code)]
    pub fn next_page(&mut self, jobs: &[JobPosting], now: DateTime<Utc>) {
        self.go_to(self.page + 1, jobs, now);
    }

    #[allow(dead_code)]
    pub fn prev_page(&mut self, jobs: &[JobPosting], now: DateTime<Utc>) {
        self.go_to(self.page.saturating_sub(1), jobs, now);
    }

    #[allow(dead_code)]
    pub fn first_page(&mut self) {
        self.page = 1;
    }

    #[allow(dead_code)]
    pub fn last_page(&mut self, jobs: &[JobPosting], now: DateTime<Utc>) {
        self.go_to(usize::MAX, jobs, now);
    }

    pub fn view(&self, jobs: &[JobPosting], now: DateTime<Utc>) -> PageView {
        build_page(jobs, &self.criteria, self.page, now)
    }

    fn total_pages(&self, jobs: &[JobPosting], now: DateTime<Utc>) -> usize {
        total_pages(filter::apply(jobs, &self.criteria, now).len())
    }
}
