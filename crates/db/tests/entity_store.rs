//! Integration tests for the genre / question / answer repositories.
//!
//! Exercises the repository layer against a real database:
//! - Hierarchy creation and eager-join read shapes
//! - Filtered and unfiltered listing
//! - Unique constraint on genre names
//! - Foreign key enforcement

use assert_matches::assert_matches;
use quizbank_core::types::DbId;
use quizbank_db::models::genre::{CreateGenre, Genre};
use quizbank_db::models::question::Question;
use quizbank_db::repositories::{AnswerRepo, GenreRepo, QuestionRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_genre(pool: &PgPool, name: &str) -> Genre {
    GenreRepo::create(
        pool,
        &CreateGenre {
            genre_name: name.to_string(),
        },
    )
    .await
    .unwrap()
}

async fn new_question(pool: &PgPool, genre_id: DbId, text: &str) -> Question {
    QuestionRepo::create(pool, genre_id, text).await.unwrap()
}

// ---------------------------------------------------------------------------
// Genres
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_genre_generates_id_and_timestamps(pool: PgPool) {
    let genre = new_genre(&pool, "Programming").await;
    assert_eq!(genre.genre_name, "Programming");
    assert_eq!(genre.id.to_string().len(), 36);
    assert_eq!(genre.created_at, genre.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_genre_by_name_is_exact(pool: PgPool) {
    let genre = new_genre(&pool, "Rust").await;

    let found = GenreRepo::find_by_name(&pool, "Rust").await.unwrap();
    assert_eq!(found.map(|g| g.id), Some(genre.id));

    assert!(GenreRepo::find_by_name(&pool, "rust").await.unwrap().is_none());
    assert!(GenreRepo::find_by_name(&pool, "Rus").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_genre_name_violates_unique_constraint(pool: PgPool) {
    new_genre(&pool, "Dup").await;

    let err = GenreRepo::create(
        &pool,
        &CreateGenre {
            genre_name: "Dup".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(
        quizbank_db::unique_violation(&err),
        Some("uq_genres_genre_name")
    );

    let all = GenreRepo::list(&pool).await.unwrap();
    assert_eq!(all.iter().filter(|g| g.genre_name == "Dup").count(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_missing_genre_returns_none(pool: PgPool) {
    let found = GenreRepo::find_by_id(&pool, DbId::new_v4()).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_genre_with_questions(pool: PgPool) {
    let genre = new_genre(&pool, "Databases").await;
    let other = new_genre(&pool, "Networks").await;
    new_question(&pool, genre.id, "What is an index?").await;
    new_question(&pool, genre.id, "What is MVCC?").await;
    new_question(&pool, other.id, "What is TCP?").await;

    let view = GenreRepo::find_with_questions(&pool, genre.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.genre.id, genre.id);
    assert_eq!(view.questions.len(), 2);
    assert!(view.questions.iter().all(|q| q.genre_id == genre.id));

    let missing = GenreRepo::find_with_questions(&pool, DbId::new_v4())
        .await
        .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_question_requires_existing_genre(pool: PgPool) {
    let err = QuestionRepo::create(&pool, DbId::new_v4(), "Orphan?")
        .await
        .unwrap_err();
    assert!(quizbank_db::is_foreign_key_violation(&err));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_questions_filtered_and_unfiltered(pool: PgPool) {
    let g1 = new_genre(&pool, "G1").await;
    let g2 = new_genre(&pool, "G2").await;
    let q1 = new_question(&pool, g1.id, "Q1").await;
    let q2 = new_question(&pool, g1.id, "Q2").await;
    let q3 = new_question(&pool, g2.id, "Q3").await;

    let filtered = QuestionRepo::list_with_genre(&pool, Some(g1.id))
        .await
        .unwrap();
    let mut ids: Vec<_> = filtered.iter().map(|q| q.question.id).collect();
    ids.sort();
    let mut expected = vec![q1.id, q2.id];
    expected.sort();
    assert_eq!(ids, expected);
    assert!(filtered.iter().all(|q| q.genre == g1));

    let all = QuestionRepo::list_with_genre(&pool, None).await.unwrap();
    assert_eq!(all.len(), 3);
    let q3_view = all.iter().find(|q| q.question.id == q3.id).unwrap();
    assert_eq!(q3_view.genre.genre_name, "G2");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_question_with_genre(pool: PgPool) {
    let genre = new_genre(&pool, "Math").await;
    let question = new_question(&pool, genre.id, "What is a group?").await;

    let view = QuestionRepo::find_with_genre(&pool, question.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.question, question);
    assert_eq!(view.genre, genre);

    assert!(QuestionRepo::find_with_genre(&pool, DbId::new_v4())
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_question_with_answers(pool: PgPool) {
    let genre = new_genre(&pool, "Data Science").await;
    let question = new_question(&pool, genre.id, "What is data science?").await;
    let lonely = new_question(&pool, genre.id, "Unanswered?").await;
    AnswerRepo::create(&pool, question.id, "A field of study")
        .await
        .unwrap();
    AnswerRepo::create(&pool, question.id, "Statistics plus code")
        .await
        .unwrap();

    let details = QuestionRepo::find_with_answers(&pool, question.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(details.question.question.id, question.id);
    assert_eq!(details.question.genre.genre_name, "Data Science");
    assert_eq!(details.answer_count, 2);
    assert_eq!(details.answers.len(), 2);

    let empty = QuestionRepo::find_with_answers(&pool, lonely.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(empty.answer_count, 0);
    assert!(empty.answers.is_empty());

    assert!(QuestionRepo::find_with_answers(&pool, DbId::new_v4())
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_answer_requires_existing_question(pool: PgPool) {
    let err = AnswerRepo::create(&pool, DbId::new_v4(), "Orphan")
        .await
        .unwrap_err();
    assert!(quizbank_db::is_foreign_key_violation(&err));
    assert_matches!(err, sqlx::Error::Database(_));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_answers_two_level_join(pool: PgPool) {
    let genre = new_genre(&pool, "Programming").await;
    let q1 = new_question(&pool, genre.id, "What is Python?").await;
    let q2 = new_question(&pool, genre.id, "What is Java?").await;
    AnswerRepo::create(&pool, q1.id, "Python answer 1").await.unwrap();
    AnswerRepo::create(&pool, q1.id, "Python answer 2").await.unwrap();
    AnswerRepo::create(&pool, q2.id, "Java answer 1").await.unwrap();

    let all = AnswerRepo::list_with_question(&pool, None).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all
        .iter()
        .all(|a| a.question.genre.genre_name == "Programming"));

    let filtered = AnswerRepo::list_with_question(&pool, Some(q1.id))
        .await
        .unwrap();
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|a| a.answer.question_id == q1.id));
    assert!(filtered
        .iter()
        .all(|a| a.question.question.question == "What is Python?"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_answer_with_question(pool: PgPool) {
    let genre = new_genre(&pool, "Machine Learning").await;
    let question = new_question(&pool, genre.id, "What is ML?").await;
    let answer = AnswerRepo::create(&pool, question.id, "A branch of AI")
        .await
        .unwrap();

    let view = AnswerRepo::find_with_question(&pool, answer.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.answer, answer);
    assert_eq!(view.question.question, question);
    assert_eq!(view.question.genre, genre);

    assert!(AnswerRepo::find_with_question(&pool, DbId::new_v4())
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_answers_by_question(pool: PgPool) {
    let genre = new_genre(&pool, "Web").await;
    let question = new_question(&pool, genre.id, "What is HTML?").await;
    let other = new_question(&pool, genre.id, "What is CSS?").await;
    AnswerRepo::create(&pool, question.id, "A markup language")
        .await
        .unwrap();
    AnswerRepo::create(&pool, other.id, "A style sheet language")
        .await
        .unwrap();

    let answers = AnswerRepo::list_by_question(&pool, question.id)
        .await
        .unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].answer, "A markup language");

    let none = AnswerRepo::list_by_question(&pool, DbId::new_v4())
        .await
        .unwrap();
    assert!(none.is_empty());
}
