//! Handlers for the `/questions` resource.
//!
//! Sub-resources:
//! `/questions/{id}/answers` and `/questions/{id}/details`

use axum::extract::{Path, Query, State};
use axum::Json;
use quizbank_core::ids::resolve_id;
use quizbank_db::models::answer::Answer;
use quizbank_db::models::question::{CreateQuestion, Question, QuestionDetails, QuestionWithGenre};
use quizbank_db::repositories::{AnswerRepo, GenreRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::{IdFilter, QuestionListParams};
use crate::state::AppState;

/// POST /questions
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateQuestion>,
) -> AppResult<Json<Question>> {
    let genre_id = resolve_id("Genre", &input.genre_id)?;
    if GenreRepo::find_by_id(&state.pool, genre_id).await?.is_none() {
        tracing::warn!(genre_id = %input.genre_id, "Question references missing genre");
        return Err(AppError::not_found("Genre", &input.genre_id));
    }

    let question = QuestionRepo::create(&state.pool, genre_id, &input.question).await?;
    tracing::info!(question_id = %question.id, %genre_id, "Question created");
    Ok(Json(question))
}

/// GET /questions?genre_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<QuestionListParams>,
) -> AppResult<Json<Vec<QuestionWithGenre>>> {
    let questions = match IdFilter::from_param(params.genre_id) {
        IdFilter::Any => QuestionRepo::list_with_genre(&state.pool, None).await?,
        IdFilter::Only(id) => QuestionRepo::list_with_genre(&state.pool, Some(id)).await?,
        IdFilter::Nothing => Vec::new(),
    };
    Ok(Json(questions))
}

/// GET /questions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<QuestionWithGenre>> {
    let question_id = resolve_id("Question", &id)?;
    let question = QuestionRepo::find_with_genre(&state.pool, question_id)
        .await?
        .ok_or_else(|| AppError::not_found("Question", &id))?;
    Ok(Json(question))
}

/// GET /questions/{id}/answers
pub async fn list_answers(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Answer>>> {
    let question_id = resolve_id("Question", &id)?;
    if QuestionRepo::find_by_id(&state.pool, question_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Question", &id));
    }

    let answers = AnswerRepo::list_by_question(&state.pool, question_id).await?;
    Ok(Json(answers))
}

/// GET /questions/{id}/details
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<QuestionDetails>> {
    let question_id = resolve_id("Question", &id)?;
    let details = QuestionRepo::find_with_answers(&state.pool, question_id)
        .await?
        .ok_or_else(|| AppError::not_found("Question", &id))?;
    tracing::debug!(%question_id, answer_count = details.answer_count, "Loaded question details");
    Ok(Json(details))
}
