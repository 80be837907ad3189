//! Route definitions for the `/answers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::answer;
use crate::state::AppState;

/// Routes mounted at `/answers`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(answer::list).post(answer::create))
        .route("/{id}", get(answer::get_by_id))
}
