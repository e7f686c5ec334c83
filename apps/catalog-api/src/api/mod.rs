//! HTTP routes for the catalog API
//!
//! Everything here is nested under `/api` by `axum_helpers::create_router`.

pub mod health;

use axum::Router;
use domain_catalog::{CatalogService, MOUNT_PATH, MongoProductRepository, handlers, seed};
use tracing::info;

use crate::state::AppState;

/// Prepare the product collection: indexes first, then the starter
/// products when seeding is enabled and the collection is empty.
pub async fn init_catalog(state: &AppState) -> eyre::Result<MongoProductRepository> {
    let catalog = &state.config.catalog;
    let repository = MongoProductRepository::with_collection(&state.db, &catalog.collection);

    repository.init_indexes().await?;

    if catalog.seed {
        let inserted = seed::seed_if_empty(&repository).await?;
        info!(inserted, collection = %catalog.collection, "Catalog seed finished");
    }

    Ok(repository)
}

pub fn routes(state: &AppState, repository: MongoProductRepository) -> Router {
    Router::new()
        .nest(MOUNT_PATH, handlers::router(CatalogService::new(repository)))
        .merge(health::router(state.clone()))
}
