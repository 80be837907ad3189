pub mod answer;
pub mod genre;
pub mod health;
pub mod question;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /genres                          list, create
/// /genres/{id}/questions           questions of one genre (flat)
///
/// /questions                       list (?genre_id=), create
/// /questions/{id}                  question with genre
/// /questions/{id}/answers          answers of one question (flat)
/// /questions/{id}/details          question with genre, answers and count
///
/// /answers                         list (?question_id=), create
/// /answers/{id}                    answer with question and genre
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/genres", genre::router())
        .nest("/questions", question::router())
        .nest("/answers", answer::router())
}
