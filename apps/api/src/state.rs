use std::sync::Arc;

use crate::catalog::{Aggregator, CatalogStore};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub aggregator: Arc<Aggregator>,
    pub config: Config,
}
