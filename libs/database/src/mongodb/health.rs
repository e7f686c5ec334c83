use mongodb::{Client, bson::doc};
use std::time::{Duration, Instant};

use crate::common::{DatabaseError, DatabaseResult};

/// Result of a timed health probe
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Error details when unhealthy
    pub message: Option<String>,
    pub latency: Duration,
}

/// Ping the server through the admin database
pub async fn ping(client: &Client) -> DatabaseResult<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}

pub async fn check_health(client: &Client) -> bool {
    ping(client).await.is_ok()
}

/// Ping with timing information
///
/// ```ignore
/// let status = check_health_detailed(&client).await;
/// if !status.healthy {
///     tracing::warn!(latency = ?status.latency, "MongoDB unhealthy: {:?}", status.message);
/// }
/// ```
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();
    let result = ping(client).await;

    HealthStatus {
        healthy: result.is_ok(),
        message: result.err().map(|e| e.to_string()),
        latency: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::options::ClientOptions;

    async fn unreachable_client() -> Client {
        let mut options = ClientOptions::parse("mongodb://127.0.0.1:1").await.unwrap();
        options.server_selection_timeout = Some(Duration::from_millis(200));
        Client::with_options(options).unwrap()
    }

    #[tokio::test]
    async fn test_ping_unreachable_is_health_check_failure() {
        let client = unreachable_client().await;
        let err = ping(&client).await.unwrap_err();
        assert!(matches!(err, DatabaseError::HealthCheckFailed(_)));
        assert!(!check_health(&client).await);
    }

    #[tokio::test]
    async fn test_detailed_reports_message_when_unhealthy() {
        let client = unreachable_client().await;
        let status = check_health_detailed(&client).await;
        assert!(!status.healthy);
        assert!(status.message.unwrap().starts_with("Health check failed"));
    }

    #[tokio::test]
    #[ignore = "requires a running MongoDB"]
    async fn test_check_health_live() {
        let url = std::env::var("MONGODB_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = Client::with_uri_str(&url).await.unwrap();
        let status = check_health_detailed(&client).await;
        assert!(status.healthy);
        assert!(status.message.is_none());
    }
}
