//! Query parameter types for list endpoints.

use quizbank_core::ids::parse_id;
use quizbank_core::types::DbId;
use quizbank_core::validation::non_empty_filter;
use serde::Deserialize;

/// `GET /questions?genre_id=`
#[derive(Debug, Default, Deserialize)]
pub struct QuestionListParams {
    pub genre_id: Option<String>,
}

/// `GET /answers?question_id=`
#[derive(Debug, Default, Deserialize)]
pub struct AnswerListParams {
    pub question_id: Option<String>,
}

/// An optional id filter as the repository layer should apply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdFilter {
    /// No value supplied, or an empty one: return everything.
    Any,
    /// Restrict to rows referencing this id.
    Only(DbId),
    /// A value that cannot be an id: no row can match.
    Nothing,
}

impl IdFilter {
    pub fn from_param(raw: Option<String>) -> Self {
        match non_empty_filter(raw) {
            None => IdFilter::Any,
            Some(raw) => parse_id(&raw).map_or(IdFilter::Nothing, IdFilter::Only),
        }
    }
}
