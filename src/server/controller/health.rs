use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::api::{ErrorDto, HealthDto},
    server::{controller::respond, error::error_response, state::AppState},
};

pub static HEALTH_TAG: &str = "health";

/// Reports whether the database answers a ping.
///
/// # Returns
/// - `200 OK` - Database reachable
/// - `503 Service Unavailable` - Ping failed
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = HealthDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => respond(
            StatusCode::OK,
            "Service is healthy",
            HealthDto {
                database: "ok".to_string(),
            },
        )
        .into_response(),
        Err(err) => {
            tracing::error!("Database ping failed: {}", err);
            error_response(StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
        }
    }
}
