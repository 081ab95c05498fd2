use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Whether a modem snapshot has been published yet
    pub snapshot_available: bool,
}

/// GET /health
///
/// Simple health check endpoint for monitoring service status.
/// Returns "ok" status, application version and whether modem data is available.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        snapshot_available: state.metrics.snapshot().await.is_some(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{MetricSnapshot, MetricsRegistry};

    fn make_state() -> Arc<AppState> {
        Arc::new(AppState {
            metrics: MetricsRegistry::new(),
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check(State(make_state())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_check_after_publish() {
        let state = make_state();
        state.metrics.publish(MetricSnapshot::default()).await;
        let response = health_check(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
