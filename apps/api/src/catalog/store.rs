use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use crate::catalog::aggregator::Aggregator;
use crate::models::job::JobPosting;
use crate::view::freshness::{Freshness, SharedFreshness};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FetchState {
    Idle,
    Loading,
}

struct Snapshot {
    jobs: Arc<Vec<JobPosting>>,
    fetched_at: Option<DateTime<Utc>>,
}

/// In-memory catalog shared by all handlers. A refresh aggregates outside
/// the snapshot lock and swaps the new list in when done. Refreshes run one
/// at a time; the store reports `Loading` while any is queued or running.
pub struct CatalogStore {
    snapshot: RwLock<Snapshot>,
    refresh_lock: Mutex<()>,
    in_flight: AtomicUsize,
    freshness: SharedFreshness,
}

/// Decrements the in-flight count even if the refresh future is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(Snapshot {
                jobs: Arc::new(Vec::new()),
                fetched_at: None,
            }),
            refresh_lock: Mutex::new(()),
            in_flight: AtomicUsize::new(0),
            freshness: Arc::new(RwLock::new(Freshness::new(Utc::now()))),
        }
    }

    pub fn freshness(&self) -> SharedFreshness {
        self.freshness.clone()
    }

    pub async fn jobs(&self) -> Arc<Vec<JobPosting>> {
        self.snapshot.read().await.jobs.clone()
    }

    pub async fn fetch_state(&self) -> FetchState {
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            FetchState::Loading
        } else {
            FetchState::Idle
        }
    }

    pub async fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot.read().await.fetched_at
    }

    /// Re-runs the aggregation and replaces the catalog. Returns the new size.
    pub async fn refresh(&self, aggregator: &Aggregator) -> usize {
        let _in_flight = InFlight::enter(&self.in_flight);
        let _serial = self.refresh_lock.lock().await;

        let jobs = aggregator.fetch_all().await;
        let count = jobs.len();
        let now = Utc::now();

        {
            let mut snapshot = self.snapshot.write().await;
            snapshot.jobs = Arc::new(jobs);
            snapshot.fetched_at = Some(now);
        }
        self.freshness.write().await.last_updated = now;

        info!(count, "Catalog refreshed");
        count
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use crate::catalog::generator::SyntheticGenerator;
    use crate::sources::fakes::{SlowSource, StaticSource};

    #[tokio::test]
    async fn test_refresh_replaces_catalog() {
        let store = CatalogStore::new();
        assert!(store.jobs().await.is_empty());
        assert!(store.fetched_at().await.is_none());

        let aggregator = Aggregator::new(
            Arc::new(StaticSource(Vec::new())),
            Arc::new(StaticSource(Vec::new())),
            SyntheticGenerator::new(40, Some(1)),
        );
        let count = store.refresh(&aggregator).await;

        assert_eq!(count, 40);
        assert_eq!(store.jobs().await.len(), 40);
        assert_eq!(store.fetch_state().await, FetchState::Idle);
        let fetched_at = store.fetched_at().await.unwrap();
        assert_eq!(store.freshness().read().await.last_updated, fetched_at);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_refreshes_stay_loading_until_last_finishes() {
        let store = Arc::new(CatalogStore::new());
        let aggregator = Arc::new(Aggregator::new(
            Arc::new(SlowSource(Duration::from_secs(10))),
            Arc::new(StaticSource(Vec::new())),
            SyntheticGenerator::new(5, Some(1)),
        ));

        let first = tokio::spawn({
            let (store, aggregator) = (store.clone(), aggregator.clone());
            async move { store.refresh(&aggregator).await }
        });
        let second = tokio::spawn({
            let (store, aggregator) = (store.clone(), aggregator.clone());
            async move { store.refresh(&aggregator).await }
        });

        // One refresh is done by now; the other runs until 20s.
        tokio::time::sleep(Duration::from_secs(15)).await;
        assert_eq!(store.fetch_state().await, FetchState::Loading);

        assert_eq!(second.await.unwrap(), 5);
        assert_eq!(first.await.unwrap(), 5);
        assert_eq!(store.fetch_state().await, FetchState::Idle);
    }
}
