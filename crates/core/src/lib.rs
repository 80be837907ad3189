//! Domain types, validation rules and errors for the quizbank service.
//!
//! This crate has no database or HTTP dependencies; `quizbank-db` and
//! `quizbank-api` build on top of it.

pub mod error;
pub mod ids;
pub mod types;
pub mod validation;
