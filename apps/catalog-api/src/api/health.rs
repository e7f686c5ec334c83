//! Readiness endpoint

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// 200 while MongoDB answers a ping, 503 otherwise
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "mongodb",
        Box::pin(async {
            database::mongodb::ping(&state.mongo_client)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogConfig, Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use database::mongodb::{MongoConfig, client_options};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt;

    async fn unreachable_state() -> AppState {
        let mongodb = MongoConfig::with_database("mongodb://127.0.0.1:1", "CatalogDb")
            .with_server_selection_timeout(Duration::from_millis(200));
        let client = mongodb::Client::with_options(client_options(&mongodb).await.unwrap()).unwrap();

        let config = Config {
            app: app_info!(),
            environment: Environment::Development,
            server: ServerConfig::default(),
            mongodb,
            catalog: CatalogConfig::default(),
        };
        AppState::new(config, client)
    }

    #[tokio::test]
    async fn test_ready_is_503_when_mongodb_unreachable() {
        let app = router(unreachable_state().await);

        let response = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["checks"]["mongodb"], "disconnected");
    }
}
