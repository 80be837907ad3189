//! Question entity model, DTOs and nested read views.

use quizbank_core::types::{DbId, Timestamp};
use quizbank_core::validation::reject_nul;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::answer::Answer;
use crate::models::genre::Genre;

/// A question row from the `questions` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub genre_id: DbId,
    pub question: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new question.
///
/// `genre_id` stays a string here: an id that is not a valid UUID is
/// reported as a missing genre, not as malformed input.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(length(min = 1, message = "is required"), custom(function = "reject_nul"))]
    pub genre_id: String,
    #[validate(length(min = 1, message = "must not be empty"), custom(function = "reject_nul"))]
    pub question: String,
}

/// A question with its parent genre.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionWithGenre {
    #[serde(flatten)]
    pub question: Question,
    pub genre: Genre,
}

/// A question with its parent genre and every answer to it.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDetails {
    pub question: QuestionWithGenre,
    pub answers: Vec<Answer>,
    pub answer_count: usize,
}

impl QuestionDetails {
    pub fn new(question: QuestionWithGenre, answers: Vec<Answer>) -> Self {
        let answer_count = answers.len();
        Self {
            question,
            answers,
            answer_count,
        }
    }
}

/// Row shape of `questions JOIN genres`. Genre columns carry a `g_` prefix.
#[derive(Debug, FromRow)]
pub(crate) struct QuestionGenreRow {
    pub id: DbId,
    pub genre_id: DbId,
    pub question: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub g_genre_name: String,
    pub g_created_at: Timestamp,
    pub g_updated_at: Timestamp,
}

impl From<QuestionGenreRow> for QuestionWithGenre {
    fn from(row: QuestionGenreRow) -> Self {
        Self {
            genre: Genre {
                id: row.genre_id,
                genre_name: row.g_genre_name,
                created_at: row.g_created_at,
                updated_at: row.g_updated_at,
            },
            question: Question {
                id: row.id,
                genre_id: row.genre_id,
                question: row.question,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}
