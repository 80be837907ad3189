//! Handlers for the `/genres` resource.

use axum::extract::{Path, State};
use axum::Json;
use quizbank_core::error::CoreError;
use quizbank_core::ids::resolve_id;
use quizbank_db::models::genre::{CreateGenre, Genre};
use quizbank_db::models::question::Question;
use quizbank_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /genres
///
/// Rejects a name that is already in use. The existence check and the
/// insert are separate statements; a concurrent duplicate that slips
/// between them is caught by the unique constraint and reported the same way.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateGenre>,
) -> AppResult<Json<Genre>> {
    if GenreRepo::find_by_name(&state.pool, &input.genre_name)
        .await?
        .is_some()
    {
        tracing::warn!(genre_name = %input.genre_name, "Genre name already in use");
        return Err(duplicate_name(&input.genre_name));
    }

    let genre = GenreRepo::create(&state.pool, &input)
        .await
        .map_err(|err| insert_error(err, &input.genre_name))?;

    tracing::info!(genre_id = %genre.id, genre_name = %genre.genre_name, "Genre created");
    Ok(Json(genre))
}

/// GET /genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}

/// GET /genres/{id}/questions
pub async fn list_questions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Question>>> {
    let genre_id = resolve_id("Genre", &id)?;
    let genre = GenreRepo::find_with_questions(&state.pool, genre_id)
        .await?
        .ok_or_else(|| AppError::not_found("Genre", &id))?;
    Ok(Json(genre.questions))
}

/// Map a failed genre insert. A unique violation means a concurrent request
/// took the name after our existence check.
fn insert_error(err: sqlx::Error, genre_name: &str) -> AppError {
    if quizbank_db::unique_violation(&err).is_some() {
        tracing::warn!(%genre_name, "Lost genre name race");
        duplicate_name(genre_name)
    } else {
        AppError::Database(err)
    }
}

fn duplicate_name(name: &str) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "Genre name '{name}' already exists"
    )))
}
