/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Fresh in-memory database with migrations applied
/// - A fully built router under test
/// - Request builders and a dispatch helper

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::SqlitePool;
use taskboard_api::app::{build_router, AppState};
use taskboard_api::config::{ApiConfig, Config, DatabaseConfig};
use taskboard_shared::db::migrations::run_migrations;
use taskboard_shared::db::pool::{create_pool, DatabaseConfig as PoolConfig};
use tower::Service as _;

/// Test context containing the database and the router under test
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context with a fresh in-memory database
    ///
    /// The pool is pinned to a single connection: each connection to
    /// "sqlite::memory:" opens its own private database, so the database
    /// lives exactly as long as this context.
    pub async fn new() -> anyhow::Result<Self> {
        let db = create_pool(PoolConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: None,
            max_lifetime_seconds: None,
            test_before_acquire: false,
        })
        .await?;

        run_migrations(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
                production: false,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        };

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }
}

/// Builds a bodyless request (GET/DELETE)
pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Builds a JSON request (POST/PUT)
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Dispatches a request against the router and returns status + JSON body
pub async fn send(ctx: &TestContext, req: Request<Body>) -> (StatusCode, Value) {
    let response = ctx.app.clone().call(req).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, body)
}

/// Creates a user through the API and returns its id
pub async fn create_test_user(ctx: &TestContext, username: &str) -> i64 {
    let (status, _) = send(
        ctx,
        json_request(
            "POST",
            "/user/create",
            serde_json::json!({
                "username": username,
                "firstname": "Test",
                "lastname": "User",
                "age": 30
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "Failed to create test user {username}");

    // Ids are store-generated in insertion order; fetch the latest row
    let (id,): (i64,) = sqlx::query_as("SELECT MAX(id) FROM users")
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    id
}

/// Creates a task through the API and returns its id
pub async fn create_test_task(ctx: &TestContext, user_id: i64, title: &str) -> i64 {
    let (status, _) = send(
        ctx,
        json_request(
            "POST",
            &format!("/task/create?user_id={user_id}"),
            serde_json::json!({
                "title": title,
                "content": "test content"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "Failed to create test task {title}");

    let (id,): (i64,) = sqlx::query_as("SELECT MAX(id) FROM tasks")
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    id
}
