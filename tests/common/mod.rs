use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, StatusCode, header},
};
use todo_api::{
    AppState,
    config::DatabaseConfig,
    db::{self, SqliteTodoRepository, TodoRepository},
    models::{Todo, TodoPayload},
    router,
};
use tower::ServiceExt;

/// Router backed by a fresh in-memory database.
pub async fn test_app() -> Router {
    let pool = db::connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 5,
        timeout: Duration::from_secs(5),
    })
    .await
    .expect("Failed to create database");
    db::ensure_schema(&pool)
        .await
        .expect("Failed to create todo table");

    router(AppState::new(Arc::new(SqliteTodoRepository::new(pool))))
}

/// Repository whose every call fails, for the storage error paths.
pub struct FailingRepository;

#[async_trait]
impl TodoRepository for FailingRepository {
    async fn list(&self) -> Result<Vec<Todo>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_by_id(&self, _id: &str) -> Result<Vec<Todo>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn insert(&self, _payload: &TodoPayload) -> Result<i64, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn update(&self, _id: &str, _payload: &TodoPayload) -> Result<u64, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete(&self, _id: &str) -> Result<u64, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

pub fn failing_app() -> Router {
    router(AppState::new(Arc::new(FailingRepository)))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn list(app: &Router) -> Vec<Todo> {
    let response = send(app, Method::GET, "/api/Todo", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_str(&body_text(response).await).unwrap()
}

pub async fn get(app: &Router, id: &str) -> (StatusCode, Vec<Todo>) {
    let response = send(app, Method::GET, &format!("/api/Todo/{id}"), None).await;
    let status = response.status();
    (status, serde_json::from_str(&body_text(response).await).unwrap())
}
