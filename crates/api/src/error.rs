use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quizbank_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and `sqlx::Error` for storage
/// faults. Implements [`IntoResponse`] to produce a `{"detail": "..."}` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `quizbank_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for a not-found error on `entity` keyed by the raw `id`.
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        AppError::Core(CoreError::not_found(entity, id))
    }

    /// Status code and client-facing message for this error.
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },
            AppError::Database(err) => classify_sqlx_error(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        (status, axum::Json(json!({ "detail": detail }))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 400.
/// - Foreign key violations map to 404: the referenced row is gone.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    if let sqlx::Error::RowNotFound = err {
        return (StatusCode::NOT_FOUND, "Resource not found".to_string());
    }
    if let Some(constraint) = quizbank_db::unique_violation(err) {
        if constraint.starts_with("uq_") {
            return (
                StatusCode::BAD_REQUEST,
                format!("Duplicate value violates unique constraint: {constraint}"),
            );
        }
    }
    if quizbank_db::is_foreign_key_violation(err) {
        return (
            StatusCode::NOT_FOUND,
            "Referenced entity not found".to_string(),
        );
    }

    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}
