//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    mongodb: bool,
    response_time_ms: u64,
}

/// Create the readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies the MongoDB connection
///
/// 503 while the database does not answer a ping.
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let health = database::mongodb::check_health_detailed(&state.mongo_client).await;

    let (code, status) = if health.healthy {
        (StatusCode::OK, "ready")
    } else {
        tracing::warn!(error = ?health.message, "MongoDB readiness check failed");
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        code,
        Json(ReadinessResponse {
            status,
            mongodb: health.healthy,
            response_time_ms: health.response_time_ms,
        }),
    )
}
