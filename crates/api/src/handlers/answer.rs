//! Handlers for the `/answers` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use quizbank_core::ids::resolve_id;
use quizbank_db::models::answer::{Answer, AnswerWithQuestion, CreateAnswer};
use quizbank_db::repositories::{AnswerRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::{AnswerListParams, IdFilter};
use crate::state::AppState;

/// POST /answers
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateAnswer>,
) -> AppResult<Json<Answer>> {
    let question_id = resolve_id("Question", &input.question_id)?;
    if QuestionRepo::find_by_id(&state.pool, question_id)
        .await?
        .is_none()
    {
        tracing::warn!(question_id = %input.question_id, "Answer references missing question");
        return Err(AppError::not_found("Question", &input.question_id));
    }

    let answer = AnswerRepo::create(&state.pool, question_id, &input.answer).await?;
    tracing::info!(answer_id = %answer.id, %question_id, "Answer created");
    Ok(Json(answer))
}

/// GET /answers?question_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AnswerListParams>,
) -> AppResult<Json<Vec<AnswerWithQuestion>>> {
    let answers = match IdFilter::from_param(params.question_id) {
        IdFilter::Any => AnswerRepo::list_with_question(&state.pool, None).await?,
        IdFilter::Only(id) => AnswerRepo::list_with_question(&state.pool, Some(id)).await?,
        IdFilter::Nothing => Vec::new(),
    };
    Ok(Json(answers))
}

/// GET /answers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AnswerWithQuestion>> {
    let answer_id = resolve_id("Answer", &id)?;
    let answer = AnswerRepo::find_with_question(&state.pool, answer_id)
        .await?
        .ok_or_else(|| AppError::not_found("Answer", &id))?;
    Ok(Json(answer))
}
