//! Observability HTTP Routes
//!
//! Health check and request counters.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::observability::MetricsSnapshot;

use super::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollments: Option<usize>,
}

/// Create observability routes
pub fn observability_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Health check handler. 503 when the store cannot be read.
async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let counts = state
        .store
        .count_contacts()
        .and_then(|c| state.store.count_enrollments().map(|e| (c, e)));

    let version = env!("CARGO_PKG_VERSION").to_string();

    match counts {
        Ok((contacts, enrollments)) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                version,
                contacts: Some(contacts),
                enrollments: Some(enrollments),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check could not read store");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                    version,
                    contacts: None,
                    enrollments: None,
                }),
            )
        }
    }
}

/// Metrics handler - returns counters as JSON
async fn metrics_handler(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            contacts: Some(2),
            enrollments: Some(0),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["contacts"], 2);
    }

    #[test]
    fn test_unavailable_omits_counts() {
        let response = HealthResponse {
            status: "unavailable".to_string(),
            version: "0.1.0".to_string(),
            contacts: None,
            enrollments: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("contacts"));
    }
}
