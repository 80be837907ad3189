//! Genre entity model and DTOs.

use quizbank_core::types::{DbId, Timestamp};
use quizbank_core::validation::reject_nul;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::question::Question;

/// A genre row from the `genres` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub genre_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new genre.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGenre {
    #[validate(
        length(min = 1, max = 255, message = "must be between 1 and 255 characters"),
        custom(function = "reject_nul")
    )]
    pub genre_name: String,
}

/// A genre together with its flat child questions.
#[derive(Debug, Clone, Serialize)]
pub struct GenreWithQuestions {
    #[serde(flatten)]
    pub genre: Genre,
    pub questions: Vec<Question>,
}
