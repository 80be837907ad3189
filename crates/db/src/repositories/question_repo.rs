//! Repository for the `questions` table.

use quizbank_core::types::DbId;
use sqlx::PgPool;

use crate::models::question::{Question, QuestionDetails, QuestionGenreRow, QuestionWithGenre};
use crate::repositories::AnswerRepo;

/// Column list shared across flat queries.
const COLUMNS: &str = "id, genre_id, question, created_at, updated_at";

/// `questions q JOIN genres g` projection decoded by [`QuestionGenreRow`].
const JOINED_SELECT: &str = "SELECT q.id, q.genre_id, q.question, q.created_at, q.updated_at, \
            g.genre_name AS g_genre_name, g.created_at AS g_created_at, \
            g.updated_at AS g_updated_at \
     FROM questions q \
     JOIN genres g ON g.id = q.genre_id";

/// Provides insert and lookup operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question under `genre_id`, returning the created row.
    ///
    /// The caller must have confirmed that the genre exists.
    pub async fn create(
        pool: &PgPool,
        genre_id: DbId,
        question: &str,
    ) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (id, genre_id, question)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(DbId::new_v4())
            .bind(genre_id)
            .bind(question)
            .fetch_one(pool)
            .await
    }

    /// Find a question by its ID, without related rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List questions with their genre, optionally restricted to one genre.
    pub async fn list_with_genre(
        pool: &PgPool,
        genre_id: Option<DbId>,
    ) -> Result<Vec<QuestionWithGenre>, sqlx::Error> {
        let query = format!(
            "{JOINED_SELECT} \
             WHERE ($1::uuid IS NULL OR q.genre_id = $1) \
             ORDER BY q.created_at, q.id"
        );
        let rows = sqlx::query_as::<_, QuestionGenreRow>(&query)
            .bind(genre_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(QuestionWithGenre::from).collect())
    }

    /// List the questions of one genre, flat.
    pub async fn list_by_genre(
        pool: &PgPool,
        genre_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions WHERE genre_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(genre_id)
            .fetch_all(pool)
            .await
    }

    /// Find a question by ID with its genre eagerly joined.
    pub async fn find_with_genre(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<QuestionWithGenre>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE q.id = $1");
        let row = sqlx::query_as::<_, QuestionGenreRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(QuestionWithGenre::from))
    }

    /// Find a question with its genre and all of its answers.
    ///
    /// Issues two statements on a single pooled connection: the
    /// question/genre join, then the flat answer list.
    pub async fn find_with_answers(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<QuestionDetails>, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let query = format!("{JOINED_SELECT} WHERE q.id = $1");
        let row = sqlx::query_as::<_, QuestionGenreRow>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };

        let answers = AnswerRepo::list_by_question_on(&mut conn, id).await?;
        Ok(Some(QuestionDetails::new(row.into(), answers)))
    }
}
