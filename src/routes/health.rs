/// Health check endpoint
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "service": "ELWOSA Tasks Gateway",
///   "status": "healthy",
///   "version": "0.1.0",
///   "timestamp": "2026-08-25T12:00:00Z"
/// }
/// ```
///
/// Does not probe the database: the gateway holds no pool, and the task
/// endpoint works without the database whenever the upstream is up.
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service name
    pub service: String,

    /// Service status
    pub status: String,

    /// Application version
    pub version: String,

    /// Current server time
    pub timestamp: DateTime<Utc>,
}

/// Health check handler
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "ELWOSA Tasks Gateway".to_string(),
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}
