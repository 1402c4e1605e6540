pub mod catalog;
pub mod health;
pub mod jobs;
pub mod live;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog browsing
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route(
            "/api/v1/jobs/technologies",
            get(jobs::handle_list_technologies),
        )
        .route("/api/v1/jobs/refresh", post(jobs::handle_refresh))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        // Lookup tables and status
        .route("/api/v1/countries", get(catalog::handle_list_countries))
        .route("/api/v1/sources", get(catalog::handle_list_sources))
        .route("/api/v1/status", get(catalog::handle_status))
        // Live queries: re-run the aggregation per request
        .route("/api/v1/live/country/:code", get(live::handle_by_country))
        .route("/api/v1/live/recent/:days", get(live::handle_recent))
        .route("/api/v1/live/source/:name", get(live::handle_by_source))
        .route(
            "/api/v1/live/technology/:tech",
            get(live::handle_by_technology),
        )
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::catalog::{Aggregator, CatalogStore, SyntheticGenerator};
    use crate::config::Config;
    use crate::sources::fakes::FailingSource;
    use crate::state::AppState;

    pub fn test_config() -> Config {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            synthetic_job_count: 60,
            remotive_url: String::new(),
            github_jobs_url: String::new(),
            merge_legacy_source: false,
            fetch_timeout: None,
            freshness_interval: std::time::Duration::from_secs(60),
            generator_seed: Some(3),
        }
    }

    /// State backed by a seeded 60-posting synthetic catalog with both boards down.
    pub async fn loaded_state() -> AppState {
        let config = test_config();
        let aggregator = Arc::new(Aggregator::new(
            Arc::new(FailingSource),
            Arc::new(FailingSource),
            SyntheticGenerator::new(config.synthetic_job_count, config.generator_seed),
        ));
        let catalog = Arc::new(CatalogStore::new());
        catalog.refresh(&aggregator).await;
        AppState {
            catalog,
            aggregator,
            config,
        }
    }
}
