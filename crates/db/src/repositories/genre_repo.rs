//! Repository for the `genres` table.

use quizbank_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::{CreateGenre, Genre, GenreWithQuestions};
use crate::repositories::QuestionRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, genre_name, created_at, updated_at";

/// Provides insert and lookup operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row.
    ///
    /// Name uniqueness is checked by the caller beforehand; the
    /// `uq_genres_genre_name` constraint still rejects a concurrent
    /// duplicate with a unique-violation database error.
    pub async fn create(pool: &PgPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let query = format!(
            "INSERT INTO genres (id, genre_name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(DbId::new_v4())
            .bind(&input.genre_name)
            .fetch_one(pool)
            .await
    }

    /// Find a genre by exact (case-sensitive) name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE genre_name = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Find a genre by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all genres, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY created_at, id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Find a genre together with all of its questions (flat).
    ///
    /// Returns `None` if the genre does not exist.
    pub async fn find_with_questions(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GenreWithQuestions>, sqlx::Error> {
        let Some(genre) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let questions = QuestionRepo::list_by_genre(pool, id).await?;
        Ok(Some(GenreWithQuestions { genre, questions }))
    }
}
