//! Simulated freshness indicator. A fixed-period ticker flips the status to
//! `Updating` for a short settle time and then stamps `last_updated`. It never
//! refetches data.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant};
use tracing::debug;

pub const DEFAULT_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);
pub const SETTLE_TIME: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessState {
    Idle,
    Updating,
}

#[derive(Debug, Clone, Serialize)]
pub struct Freshness {
    pub state: FreshnessState,
    pub last_updated: DateTime<Utc>,
}

impl Freshness {
    pub fn new(last_updated: DateTime<Utc>) -> Self {
        Self {
            state: FreshnessState::Idle,
            last_updated,
        }
    }
}

pub type SharedFreshness = Arc<RwLock<Freshness>>;

/// Handle to the recurring freshness task. The task is aborted when the
/// handle is cancelled or dropped.
pub struct FreshnessTicker {
    handle: JoinHandle<()>,
}

impl FreshnessTicker {
    pub fn spawn(status: SharedFreshness, period: Duration, settle: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                status.write().await.state = FreshnessState::Updating;
                sleep(settle).await;

                let mut freshness = status.write().await;
                freshness.last_updated = Utc::now();
                freshness.state = FreshnessState::Idle;
                debug!("Freshness stamp updated");
            }
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for FreshnessTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// "just now", "N min ago", "Nh ago", or "1 day ago".
pub fn last_updated_label(last_updated: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - last_updated).num_milliseconds().div_euclid(60_000);
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} min ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    "1 day ago".to_string()
}
