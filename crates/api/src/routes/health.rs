use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use retuco_core::types::Timestamp;
use serde::Serialize;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthData {
    /// Overall service status.
    pub status: &'static str,
    /// Server time at the moment of the check.
    pub timestamp: Timestamp,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /api/health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthData>> {
    let db_healthy = retuco_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(ApiResponse::ok_with(
        "Studio backend is running",
        HealthData {
            status,
            timestamp: Utc::now(),
            db_healthy,
        },
    ))
}

/// Mount the health check route (intended for mounting under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
