//! Repository for the `answers` table.

use quizbank_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::answer::{Answer, AnswerQuestionGenreRow, AnswerWithQuestion};

/// Column list shared across flat queries.
const COLUMNS: &str = "id, question_id, answer, created_at, updated_at";

/// `answers a JOIN questions q JOIN genres g` projection decoded by
/// [`AnswerQuestionGenreRow`].
const JOINED_SELECT: &str = "SELECT a.id, a.question_id, a.answer, a.created_at, a.updated_at, \
            q.genre_id AS q_genre_id, q.question AS q_question, \
            q.created_at AS q_created_at, q.updated_at AS q_updated_at, \
            g.genre_name AS g_genre_name, g.created_at AS g_created_at, \
            g.updated_at AS g_updated_at \
     FROM answers a \
     JOIN questions q ON q.id = a.question_id \
     JOIN genres g ON g.id = q.genre_id";

/// Provides insert and lookup operations for answers.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Insert a new answer under `question_id`, returning the created row.
    ///
    /// The caller must have confirmed that the question exists.
    pub async fn create(
        pool: &PgPool,
        question_id: DbId,
        answer: &str,
    ) -> Result<Answer, sqlx::Error> {
        let query = format!(
            "INSERT INTO answers (id, question_id, answer)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(DbId::new_v4())
            .bind(question_id)
            .bind(answer)
            .fetch_one(pool)
            .await
    }

    /// List answers with their question and genre, optionally restricted to
    /// one question.
    pub async fn list_with_question(
        pool: &PgPool,
        question_id: Option<DbId>,
    ) -> Result<Vec<AnswerWithQuestion>, sqlx::Error> {
        let query = format!(
            "{JOINED_SELECT} \
             WHERE ($1::uuid IS NULL OR a.question_id = $1) \
             ORDER BY a.created_at, a.id"
        );
        let rows = sqlx::query_as::<_, AnswerQuestionGenreRow>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(AnswerWithQuestion::from).collect())
    }

    /// Find an answer by ID with its question and genre eagerly joined.
    pub async fn find_with_question(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AnswerWithQuestion>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE a.id = $1");
        let row = sqlx::query_as::<_, AnswerQuestionGenreRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(AnswerWithQuestion::from))
    }

    /// List the answers of one question, flat.
    pub async fn list_by_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::list_by_question_on(&mut conn, question_id).await
    }

    /// Same as [`AnswerRepo::list_by_question`] on an already acquired
    /// connection.
    pub(crate) async fn list_by_question_on(
        conn: &mut PgConnection,
        question_id: DbId,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM answers WHERE question_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(question_id)
            .fetch_all(conn)
            .await
    }
}
