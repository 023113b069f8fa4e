// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::util::ServiceExt as _;

use super::mocks::{
    FixedClock, MemoryArticleRead, MemoryArticleWrite, MemoryCommentRead, MemoryCommentWrite,
    MemoryStore,
};
use kiji_api::application::services::ApplicationServices;
use kiji_api::infrastructure::repositories::{
    SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCommentReadRepository,
    SqliteCommentWriteRepository,
};
use kiji_api::infrastructure::time::SystemClock;
use kiji_api::presentation::http::{routes::build_router, state::HttpState};

/// Services wired against the shared in-memory store with a fixed clock.
pub fn make_memory_services() -> (Arc<MemoryStore>, ApplicationServices) {
    let store = Arc::new(MemoryStore::default());
    let services = ApplicationServices::new(
        Arc::new(MemoryArticleWrite(Arc::clone(&store))),
        Arc::new(MemoryArticleRead(Arc::clone(&store))),
        Arc::new(MemoryCommentWrite(Arc::clone(&store))),
        Arc::new(MemoryCommentRead(Arc::clone(&store))),
        Arc::new(FixedClock),
    );
    (store, services)
}

/// Fresh migrated SQLite database for one test. A single pooled connection
/// that never gets recycled, so the in-memory database survives the whole
/// test.
pub async fn make_sqlite_pool() -> Arc<sqlx::SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");

    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await
        .expect("enable foreign keys");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");

    Arc::new(pool)
}

/// Full router over real SQLite repositories, as production wires it.
pub async fn make_test_router() -> Router {
    let pool = make_sqlite_pool().await;

    let services = Arc::new(ApplicationServices::new(
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool))),
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool))),
        Arc::new(SqliteCommentWriteRepository::new(Arc::clone(&pool))),
        Arc::new(SqliteCommentReadRepository::new(Arc::clone(&pool))),
        Arc::new(SystemClock),
    ));

    build_router(HttpState { services })
}

/// Fire one request at the router and decode the JSON body (Null for an
/// empty body, e.g. 204 responses).
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match payload {
        Some(value) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
