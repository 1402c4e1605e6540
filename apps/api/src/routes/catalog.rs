use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::pools::{Country, COUNTRIES, SOURCES};
use crate::catalog::FetchState;
use crate::sources::{github, remotive};
use crate::state::AppState;
use crate::view::freshness::{last_updated_label, FreshnessState};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub fetch_state: FetchState,
    pub freshness: FreshnessState,
    pub last_updated: DateTime<Utc>,
    pub last_updated_label: String,
    pub source_count: usize,
    pub total_jobs: usize,
}

/// GET /api/v1/countries
pub async fn handle_list_countries() -> Json<&'static [Country]> {
    Json(COUNTRIES)
}

/// GET /api/v1/sources
/// Every source name a posting in the catalog can carry.
pub async fn handle_list_sources(State(state): State<AppState>) -> Json<Vec<&'static str>> {
    let mut sources = SOURCES.to_vec();
    sources.push(remotive::SOURCE_NAME);
    if state.config.merge_legacy_source {
        sources.push(github::SOURCE_NAME);
    }
    Json(sources)
}

/// GET /api/v1/status
pub async fn handle_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let freshness = state.catalog.freshness().read().await.clone();
    Json(StatusResponse {
        fetch_state: state.catalog.fetch_state().await,
        freshness: freshness.state,
        last_updated: freshness.last_updated,
        last_updated_label: last_updated_label(freshness.last_updated, Utc::now()),
        source_count: state.aggregator.source_count(),
        total_jobs: state.catalog.jobs().await.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::routes::test_support::loaded_state;

    #[tokio::test]
    async fn test_status_after_load() {
        let state = loaded_state().await;
        let Json(status) = handle_status(State(state)).await;
        assert_eq!(status.fetch_state, FetchState::Idle);
        assert_eq!(status.freshness, FreshnessState::Idle);
        assert_eq!(status.last_updated_label, "just now");
        assert_eq!(status.source_count, 2);
        assert_eq!(status.total_jobs, 60);
    }

    #[tokio::test]
    async fn test_sources_exclude_legacy_by_default() {
        let state = loaded_state().await;
        let Json(sources) = handle_list_sources(State(state)).await;
        assert!(sources.contains(&"Remotive.io"));
        assert!(!sources.contains(&"GitHub Jobs"));
    }

    #[tokio::test]
    async fn test_countries_table() {
        let Json(countries) = handle_list_countries().await;
        assert!(countries.iter().any(|c| c.code == "BR" && c.name == "Brazil"));
    }
}
