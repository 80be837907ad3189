#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use quizbank_api::config::ServerConfig;
use quizbank_api::router::build_app_router;
use quizbank_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router, with the production middleware
/// stack, on top of the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a genre and return its id. Panics unless the server answers 200.
pub async fn create_genre(pool: &PgPool, name: &str) -> String {
    let response = post_json(
        build_test_app(pool.clone()),
        "/genres",
        serde_json::json!({ "genre_name": name }),
    )
    .await;
    assert_eq!(response.status(), 200);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

/// POST a question and return its id. Panics unless the server answers 200.
pub async fn create_question(pool: &PgPool, genre_id: &str, text: &str) -> String {
    let response = post_json(
        build_test_app(pool.clone()),
        "/questions",
        serde_json::json!({ "genre_id": genre_id, "question": text }),
    )
    .await;
    assert_eq!(response.status(), 200);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

/// POST an answer and return its id. Panics unless the server answers 200.
pub async fn create_answer(pool: &PgPool, question_id: &str, text: &str) -> String {
    let response = post_json(
        build_test_app(pool.clone()),
        "/answers",
        serde_json::json!({ "question_id": question_id, "answer": text }),
    )
    .await;
    assert_eq!(response.status(), 200);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

/// Count rows in `table`. Table names are test-controlled literals.
pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
