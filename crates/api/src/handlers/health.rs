//! Liveness endpoints.

use axum::extract::State;
use axum::Json;
use quizbank_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// `GET /` payload.
#[derive(Serialize)]
pub struct HelloResponse {
    #[serde(rename = "Hello")]
    pub hello: &'static str,
}

/// `GET /health_check` payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process is serving requests.
    pub status: &'static str,
    /// Server time when the response was produced.
    pub timestamp: Timestamp,
    /// `"ok"` or `"unreachable"`.
    pub database: &'static str,
}

/// GET /
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse { hello: "World" })
}

/// GET /health_check
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match quizbank_db::health_check(&state.pool).await {
        Ok(()) => "ok",
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            "unreachable"
        }
    };

    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now(),
        database,
    })
}
