/// Task CRUD endpoints
///
/// # Endpoints
///
/// - `GET /task/` - List all tasks
/// - `GET /task/task_id?task_id=` - Get a task by id
/// - `POST /task/create?user_id=` - Create a task for a user
/// - `PUT /task/update?task_id=` - Update a task
/// - `DELETE /task/delete?task_id=` - Delete a task

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::TransactionAck,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskboard_shared::models::{
    task::{CreateTask, Task, UpdateTask},
    user::User,
};
use validator::Validate;

/// Query parameter selecting a task
#[derive(Debug, Deserialize)]
pub struct TaskIdQuery {
    /// Task id to operate on
    pub task_id: i64,
}

/// Query parameter selecting the owning user on creation
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    /// Id of the user the new task belongs to
    pub user_id: i64,
}

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title; the slug is derived from it
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    /// Task body text
    pub content: String,
}

/// Update task request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    /// New title (slug is not recomputed)
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    /// New body text
    pub content: String,

    /// New priority
    pub priority: i64,
}

/// Lists all tasks
///
/// # Endpoint
///
/// ```text
/// GET /task/
/// ```
pub async fn all_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list_all(&state.db).await?;
    Ok(Json(tasks))
}

/// Gets a task by id
///
/// # Endpoint
///
/// ```text
/// GET /task/task_id?task_id=1
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No task with the given id
pub async fn task_by_id(
    State(state): State<AppState>,
    Query(query): Query<TaskIdQuery>,
) -> ApiResult<Json<Task>> {
    let task = Task::find_by_id(&state.db, query.task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task was not found".to_string()))?;

    Ok(Json(task))
}

/// Creates a task owned by the given user
///
/// The owning user is looked up first; when it does not exist the request
/// fails with 404 and nothing is written. The slug is derived from the
/// title at creation time, priority starts at 0.
///
/// # Endpoint
///
/// ```text
/// POST /task/create?user_id=1
/// Content-Type: application/json
///
/// {
///   "title": "Buy milk",
///   "content": "2 liters"
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No user with the given id
/// - `422 Unprocessable Entity`: Validation failed
pub async fn create_task(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TransactionAck>)> {
    req.validate()?;

    let user = User::find_by_id(&state.db, query.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User was not found".to_string()))?;

    let task = Task::create(
        &state.db,
        user.id,
        CreateTask {
            title: req.title,
            content: req.content,
        },
    )
    .await?;

    tracing::info!(task_id = task.id, user_id = user.id, slug = %task.slug, "Task created");

    Ok((StatusCode::CREATED, Json(TransactionAck::created())))
}

/// Updates a task
///
/// Overwrites title, content, and priority; the slug keeps the value
/// derived from the original title.
///
/// # Endpoint
///
/// ```text
/// PUT /task/update?task_id=1
/// Content-Type: application/json
///
/// {
///   "title": "Buy oat milk",
///   "content": "1 liter",
///   "priority": 5
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No task with the given id
/// - `422 Unprocessable Entity`: Validation failed
pub async fn update_task(
    State(state): State<AppState>,
    Query(query): Query<TaskIdQuery>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TransactionAck>> {
    req.validate()?;

    Task::update(
        &state.db,
        query.task_id,
        UpdateTask {
            title: req.title,
            content: req.content,
            priority: req.priority,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Task was not found".to_string()))?;

    Ok(Json(TransactionAck::ok("Task update is successful")))
}

/// Deletes a task
///
/// # Endpoint
///
/// ```text
/// DELETE /task/delete?task_id=1
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No task with the given id
pub async fn delete_task(
    State(state): State<AppState>,
    Query(query): Query<TaskIdQuery>,
) -> ApiResult<Json<TransactionAck>> {
    let deleted = Task::delete(&state.db, query.task_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Task was not found".to_string()));
    }

    Ok(Json(TransactionAck::ok("Task delete is successful")))
}
