/// User CRUD endpoints
///
/// # Endpoints
///
/// - `GET /user/` - List all users
/// - `GET /user/user_id?user_id=` - Get a user by id
/// - `GET /user/user_id/tasks?user_id=` - List a user's tasks
/// - `POST /user/create` - Create a user
/// - `PUT /user/update?user_id=` - Update a user's display fields
/// - `DELETE /user/delete?user_id=` - Delete a user and their tasks

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
    task::Task,
    user::{CreateUser, UpdateUser, User},
};
use validator::Validate;

/// Query parameter selecting a user
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    /// User id to operate on
    pub user_id: i64,
}

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Unique username; the slug is derived from it
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    /// Display first name
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub firstname: String,

    /// Display last name
    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub lastname: String,

    /// Age in years
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i64,
}

/// Update user request
///
/// Username and slug are immutable post-creation and therefore absent.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New first name
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub firstname: String,

    /// New last name
    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub lastname: String,

    /// New age
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i64,
}

/// Lists all users
///
/// # Endpoint
///
/// ```text
/// GET /user/
/// ```
pub async fn all_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list_all(&state.db).await?;
    Ok(Json(users))
}

/// Gets a user by id
///
/// # Endpoint
///
/// ```text
/// GET /user/user_id?user_id=1
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No user with the given id
pub async fn user_by_id(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, query.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User was not found".to_string()))?;

    Ok(Json(user))
}

/// Lists all tasks owned by a user
///
/// The filter runs on the tasks' own user_id column.
///
/// # Endpoint
///
/// ```text
/// GET /user/user_id/tasks?user_id=1
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No user with the given id
pub async fn tasks_by_user_id(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<Vec<Task>>> {
    if User::find_by_id(&state.db, query.user_id).await?.is_none() {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    let tasks = Task::list_by_user(&state.db, query.user_id).await?;
    Ok(Json(tasks))
}

/// Creates a user
///
/// The slug is derived from the username at creation time and never
/// regenerated. Username uniqueness is enforced by the storage UNIQUE
/// constraint only.
///
/// # Endpoint
///
/// ```text
/// POST /user/create
/// Content-Type: application/json
///
/// {
///   "username": "john_doe",
///   "firstname": "John",
///   "lastname": "Doe",
///   "age": 30
/// }
/// ```
///
/// # Errors
///
/// - `409 Conflict`: Username already exists
/// - `422 Unprocessable Entity`: Validation failed
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<TransactionAck>)> {
    req.validate()?;

    let user = User::create(
        &state.db,
        CreateUser {
            username: req.username,
            firstname: req.firstname,
            lastname: req.lastname,
            age: req.age,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, slug = %user.slug, "User created");

    Ok((StatusCode::CREATED, Json(TransactionAck::created())))
}

/// Updates a user's display fields
///
/// Overwrites firstname, lastname, and age; username and slug stay as
/// created.
///
/// # Endpoint
///
/// ```text
/// PUT /user/update?user_id=1
/// Content-Type: application/json
///
/// {
///   "firstname": "Jonathan",
///   "lastname": "Doe",
///   "age": 31
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No user with the given id
/// - `422 Unprocessable Entity`: Validation failed
pub async fn update_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<TransactionAck>> {
    req.validate()?;

    User::update(
        &state.db,
        query.user_id,
        UpdateUser {
            firstname: req.firstname,
            lastname: req.lastname,
            age: req.age,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("User was not found".to_string()))?;

    Ok(Json(TransactionAck::ok("User update is successful")))
}

/// Deletes a user and every task they own
///
/// Both deletes run in a single transaction (cascade).
///
/// # Endpoint
///
/// ```text
/// DELETE /user/delete?user_id=1
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No user with the given id
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<TransactionAck>> {
    let deleted = User::delete(&state.db, query.user_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    tracing::info!(user_id = query.user_id, "User deleted with their tasks");

    Ok(Json(TransactionAck::ok("User delete is successful")))
}
