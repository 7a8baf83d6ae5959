use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

/// Health check endpoint response structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        HealthStatus {
            status: "healthy".to_string(),
            message: "API is running successfully".to_string(),
        }
    }
}

/// GET /health/
///
/// Constant responder used by monitoring to confirm the API is up.
pub async fn health_check() -> impl IntoResponse {
    tracing::debug!("Health check endpoint accessed");
    (StatusCode::OK, Json(HealthStatus::healthy()))
}
