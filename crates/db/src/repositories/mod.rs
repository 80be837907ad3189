//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every read states its fetch
//! shape in its name: flat rows, rows with their parent eagerly joined, or
//! a parent with its children.

pub mod answer_repo;
pub mod genre_repo;
pub mod question_repo;

pub use answer_repo::AnswerRepo;
pub use genre_repo::GenreRepo;
pub use question_repo::QuestionRepo;
