//! Answer entity model, DTOs and nested read views.

use quizbank_core::types::{DbId, Timestamp};
use quizbank_core::validation::reject_nul;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::genre::Genre;
use crate::models::question::{Question, QuestionWithGenre};

/// An answer row from the `answers` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Answer {
    pub id: DbId,
    pub question_id: DbId,
    pub answer: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new answer. `question_id` is kept as a string for the
/// same reason as `CreateQuestion::genre_id`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAnswer {
    #[validate(length(min = 1, message = "is required"), custom(function = "reject_nul"))]
    pub question_id: String,
    #[validate(length(min = 1, message = "must not be empty"), custom(function = "reject_nul"))]
    pub answer: String,
}

/// An answer with its parent question, which in turn carries its genre.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerWithQuestion {
    #[serde(flatten)]
    pub answer: Answer,
    pub question: QuestionWithGenre,
}

/// Row shape of `answers JOIN questions JOIN genres`.
/// Question columns carry a `q_` prefix, genre columns a `g_` prefix.
#[derive(Debug, FromRow)]
pub(crate) struct AnswerQuestionGenreRow {
    pub id: DbId,
    pub question_id: DbId,
    pub answer: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub q_genre_id: DbId,
    pub q_question: String,
    pub q_created_at: Timestamp,
    pub q_updated_at: Timestamp,
    pub g_genre_name: String,
    pub g_created_at: Timestamp,
    pub g_updated_at: Timestamp,
}

impl From<AnswerQuestionGenreRow> for AnswerWithQuestion {
    fn from(row: AnswerQuestionGenreRow) -> Self {
        let genre = Genre {
            id: row.q_genre_id,
            genre_name: row.g_genre_name,
            created_at: row.g_created_at,
            updated_at: row.g_updated_at,
        };
        let question = Question {
            id: row.question_id,
            genre_id: row.q_genre_id,
            question: row.q_question,
            created_at: row.q_created_at,
            updated_at: row.q_updated_at,
        };
        Self {
            answer: Answer {
                id: row.id,
                question_id: row.question_id,
                answer: row.answer,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            question: QuestionWithGenre { question, genre },
        }
    }
}
