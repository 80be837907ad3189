use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Handlers keep no state of their own between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Each repository call checks a connection
    /// out for the duration of its query and returns it on every exit path.
    pub pool: quizbank_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
