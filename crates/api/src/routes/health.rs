use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Mount the liveness routes (`/` and `/health_check`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::hello))
        .route("/health_check", get(health::health_check))
}
