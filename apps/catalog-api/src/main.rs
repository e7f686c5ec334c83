use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::common::RetryConfig;
use database::mongodb::connect_from_config_with_retry;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!(
        database = config.mongodb.database(),
        "Starting {} v{}", config.app.name, config.app.version
    );

    // Connect to MongoDB with retry
    let mongo_client = connect_from_config_with_retry(&config.mongodb, RetryConfig::default()).await?;

    // Initialize the application state
    let state = AppState::new(config, mongo_client);

    // Create indexes and seed the starter catalog
    let repository = api::init_catalog(&state).await?;

    // Build router with API routes
    let api_routes = api::routes(&state, repository);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting Catalog API with graceful shutdown ({:?} cleanup timeout)",
        state.config.server.shutdown_timeout
    );

    // Production-ready server with graceful shutdown
    let client = state.mongo_client.clone();
    create_production_app(
        app,
        &state.config.server,
        state.config.server.shutdown_timeout,
        async move {
            info!("Shutting down: closing MongoDB connections");
            client.shutdown().await;
            info!("MongoDB connections closed");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
