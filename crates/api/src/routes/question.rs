//! Route definitions for the `/questions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::question;
use crate::state::AppState;

/// Routes mounted at `/questions`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// GET    /{id}/answers        -> list_answers
/// GET    /{id}/details        -> details
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(question::list).post(question::create))
        .route("/{id}", get(question::get_by_id))
        .route("/{id}/answers", get(question::list_answers))
        .route("/{id}/details", get(question::details))
}
