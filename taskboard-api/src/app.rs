/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskboard_api::{app::AppState, config::Config};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     ..Default::default()
/// })
/// .await?;
/// let state = AppState::new(pool, config);
/// let app = taskboard_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, middleware::security::SecurityHeadersLayer};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// The router is organized as follows:
/// ```text
/// /
/// ├── /health                   # Health check
/// ├── /user/                    # User CRUD
/// │   ├── GET    /              # List all users
/// │   ├── GET    /user_id       # Get user by id (?user_id=)
/// │   ├── GET    /user_id/tasks # List a user's tasks (?user_id=)
/// │   ├── POST   /create        # Create user
/// │   ├── PUT    /update        # Update user (?user_id=)
/// │   └── DELETE /delete        # Delete user + their tasks (?user_id=)
/// └── /task/                    # Task CRUD
///     ├── GET    /              # List all tasks
///     ├── GET    /task_id       # Get task by id (?task_id=)
///     ├── POST   /create        # Create task (?user_id=)
///     ├── PUT    /update        # Update task (?task_id=)
///     └── DELETE /delete        # Delete task (?task_id=)
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Security headers
///
/// # Example
///
/// ```no_run
/// use taskboard_api::app::{AppState, build_router};
/// use taskboard_api::config::Config;
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     ..Default::default()
/// })
/// .await?;
/// let state = AppState::new(pool, config);
///
/// let app = build_router(state);
///
/// // Start server
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```
pub fn build_router(state: AppState) -> Router {
    // Import route handlers
    use crate::routes;

    // Health check
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // User CRUD
    //
    // Routes are registered with absolute paths and merged (rather than
    // nested) so the list endpoint is reachable at the spec'd trailing-slash
    // URL `/user/`: axum's `nest("/user", _)` matches `/user` but not
    // `/user/`, whereas a literal `/user/` route matches it exactly.
    let user_routes = Router::new()
        .route("/user/", get(routes::users::all_users))
        .route("/user/user_id", get(routes::users::user_by_id))
        .route("/user/user_id/tasks", get(routes::users::tasks_by_user_id))
        .route("/user/create", post(routes::users::create_user))
        .route("/user/update", put(routes::users::update_user))
        .route("/user/delete", delete(routes::users::delete_user));

    // Task CRUD
    let task_routes = Router::new()
        .route("/task/", get(routes::tasks::all_tasks))
        .route("/task/task_id", get(routes::tasks::task_by_id))
        .route("/task/create", post(routes::tasks::create_task))
        .route("/task/update", put(routes::tasks::update_task))
        .route("/task/delete", delete(routes::tasks::delete_task));

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        // Production mode: configure allowed origins
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    // Combine all routes with middleware stack
    Router::new()
        .merge(health_routes)
        .merge(user_routes)
        .merge(task_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(SecurityHeadersLayer::new(state.config.api.production))
        .with_state(state)
}
