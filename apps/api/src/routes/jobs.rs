use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::filter::{FilterCriteria, FilterQuery};
use crate::state::AppState;
use crate::view::session::BrowseSession;
use crate::view::stats::distinct_technologies;
use crate::view::{JobView, PageView};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub count: usize,
    pub fetched_at: Option<DateTime<Utc>>,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(filter): Query<FilterQuery>,
    Query(paging): Query<PageQuery>,
) -> Result<Json<PageView>, AppError> {
    let criteria = FilterCriteria::try_from(filter)?;
    let jobs = state.catalog.jobs().await;
    let now = Utc::now();

    let mut session = BrowseSession::default();
    session.set_criteria(criteria);
    session.go_to(paging.page.unwrap_or(1), &jobs, now);
    Ok(Json(session.view(&jobs, now)))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobView>, AppError> {
    let jobs = state.catalog.jobs().await;
    let job = jobs
        .iter()
        .find(|j| j.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(JobView::new(job, Utc::now())))
}

/// GET /api/v1/jobs/technologies
pub async fn handle_list_technologies(State(state): State<AppState>) -> Json<Vec<String>> {
    let jobs = state.catalog.jobs().await;
    Json(distinct_technologies(&jobs))
}

/// POST /api/v1/jobs/refresh
pub async fn handle_refresh(State(state): State<AppState>) -> Json<RefreshResponse> {
    let count = state.catalog.refresh(&state.aggregator).await;
    Json(RefreshResponse {
        count,
        fetched_at: state.catalog.fetched_at().await,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::routes::test_support::loaded_state;

    fn query(pairs: &[(&str, &str)]) -> FilterQuery {
        let mut q = FilterQuery::default();
        for (k, v) in pairs {
            let v = Some(v.to_string());
            match *k {
                "search" => q.search = v,
                "country" => q.country = v,
                "type" => q.employment_type = v,
                "days_ago" => q.days_ago = v,
                _ => unreachable!(),
            }
        }
        q
    }

    #[tokio::test]
    async fn test_list_jobs_first_page() {
        let state = loaded_state().await;
        let Json(view) = handle_list_jobs(
            State(state),
            Query(FilterQuery::default()),
            Query(PageQuery { page: None }),
        )
        .await
        .unwrap();

        assert_eq!(view.pagination.page, 1);
        assert_eq!(view.pagination.total_pages, 5);
        assert_eq!(view.jobs.len(), 12);
        assert_eq!(view.stats.total, 60);
    }

    #[tokio::test]
    async fn test_list_jobs_clamps_page() {
        let state = loaded_state().await;
        let Json(view) = handle_list_jobs(
            State(state),
            Query(FilterQuery::default()),
            Query(PageQuery { page: Some(99) }),
        )
        .await
        .unwrap();

        assert_eq!(view.pagination.page, 5);
        assert!(!view.pagination.has_next);
    }

    #[tokio::test]
    async fn test_list_jobs_filters_by_country() {
        let state = loaded_state().await;
        let Json(view) = handle_list_jobs(
            State(state),
            Query(query(&[("country", "BR"), ("days_ago", "all")])),
            Query(PageQuery { page: None }),
        )
        .await
        .unwrap();

        assert!(view.jobs.iter().all(|j| j.job.country == "BR"));
        assert!(view.stats.countries <= 1);
    }

    #[tokio::test]
    async fn test_list_jobs_rejects_unknown_type() {
        let state = loaded_state().await;
        let result = handle_list_jobs(
            State(state),
            Query(query(&[("type", "CLT")])),
            Query(PageQuery { page: None }),
        )
        .await;

        let err = result.err().unwrap();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_job_found_and_missing() {
        let state = loaded_state().await;
        let id = state.catalog.jobs().await[0].id.clone();

        let Json(view) = handle_get_job(State(state.clone()), Path(id.clone()))
            .await
            .unwrap();
        assert_eq!(view.job.id, id);

        let missing = handle_get_job(State(state), Path("nope".to_string())).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_technologies_sorted() {
        let state = loaded_state().await;
        let Json(techs) = handle_list_technologies(State(state)).await;
        assert!(!techs.is_empty());
        assert!(techs.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_refresh_regenerates_catalog() {
        let state = loaded_state().await;
        let before = state.catalog.jobs().await;

        let Json(resp) = handle_refresh(State(state.clone())).await;
        assert_eq!(resp.count, 60);
        assert!(resp.fetched_at.is_some());

        let after = state.catalog.jobs().await;
        assert_ne!(*before, *after);
    }
}
