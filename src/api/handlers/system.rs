//! System endpoints: health check.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::error::{ErrorResponse, KioskError};

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `true` when healthy.
    pub ok: bool,
    /// Service status string.
    pub status: String,
    /// Number of rooms with a stored snapshot row — doubles as a
    /// storage connectivity probe.
    pub room_state_count: i64,
    /// Crate version.
    pub version: String,
    /// Current server time.
    pub timestamp: String,
}

/// `GET /health` — Service health status.
///
/// # Errors
///
/// Returns a persistence error if the storage probe fails.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Pings storage and returns service health, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Storage unreachable", body = ErrorResponse),
    )
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, KioskError> {
    let room_state_count = state.room_service.room_state_count().await?;

    Ok(Json(HealthResponse {
        ok: true,
        status: "healthy".to_string(),
        room_state_count,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
