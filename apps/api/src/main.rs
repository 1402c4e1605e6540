mod catalog;
mod config;
mod errors;
mod models;
mod routes;
mod sources;
mod state;
mod view;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{Aggregator, CatalogStore, SyntheticGenerator};
use crate::config::Config;
use crate::routes::build_router;
use crate::sources::{GithubJobsSource, RemotiveSource};
use crate::state::AppState;
use crate::view::freshness::{FreshnessTicker, SETTLE_TIME};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobs Hunter API v{}", env!("CARGO_PKG_VERSION"));

    // One HTTP client shared by both boards
    let mut http = reqwest::Client::builder();
    if let Some(timeout) = config.fetch_timeout {
        http = http.timeout(timeout);
    }
    let http = http.build()?;

    let generator = SyntheticGenerator::new(config.synthetic_job_count, config.generator_seed);
    let aggregator = Arc::new(
        Aggregator::new(
            Arc::new(RemotiveSource::new(http.clone(), &config.remotive_url)),
            Arc::new(GithubJobsSource::new(http, &config.github_jobs_url)),
            generator,
        )
        .with_legacy_merge(config.merge_legacy_source),
    );
    info!(
        "Aggregator initialized (synthetic batch: {}, legacy merge: {})",
        config.synthetic_job_count, config.merge_legacy_source
    );

    // Initial load
    let catalog = Arc::new(CatalogStore::new());
    catalog.refresh(&aggregator).await;

    let freshness = FreshnessTicker::spawn(
        catalog.freshness(),
        config.freshness_interval,
        SETTLE_TIME,
    );

    let state = AppState {
        catalog,
        aggregator,
        config: config.clone(),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    freshness.cancel();

    Ok(())
}
