//! Derived queries that bypass the cached catalog and re-run the full
//! aggregation before applying a single predicate.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::models::job::JobPosting;
use crate::state::AppState;

/// GET /api/v1/live/country/:code
pub async fn handle_by_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Json<Vec<JobPosting>> {
    Json(state.aggregator.jobs_by_country(&code).await)
}

/// GET /api/v1/live/recent/:days
pub async fn handle_recent(
    State(state): State<AppState>,
    Path(days): Path<u32>,
) -> Json<Vec<JobPosting>> {
    Json(state.aggregator.recent_jobs(days).await)
}

/// GET /api/v1/live/source/:name
pub async fn handle_by_source(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Vec<JobPosting>> {
    Json(state.aggregator.jobs_by_source(&name).await)
}

/// GET /api/v1/live/technology/:tech
pub async fn handle_by_technology(
    State(state): State<AppState>,
    Path(tech): Path<String>,
) -> Json<Vec<JobPosting>> {
    Json(state.aggregator.jobs_by_technology(&tech).await)
}
