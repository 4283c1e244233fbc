use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{model::health::HealthDto, server::state::AppState};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report service and database health.
///
/// # Returns
/// - `200 OK` - Database reachable
/// - `503 Service Unavailable` - Database ping failed
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service healthy", body = HealthDto),
        (status = 503, description = "Database unreachable", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthDto {
                status: "ok".to_string(),
                database: "connected".to_string(),
            }),
        ),
        Err(err) => {
            tracing::error!("Database health check failed: {}", err);

            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthDto {
                    status: "error".to_string(),
                    database: format!("disconnected: {}", err),
                }),
            )
        }
    }
}
