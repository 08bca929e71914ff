/// Task model and database operations
///
/// Tasks are the unit of work tracked by the system. Every task belongs to
/// exactly one user via `user_id`; the owning user must exist at creation
/// time (callers verify this before inserting).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     title TEXT NOT NULL,
///     content TEXT NOT NULL,
///     priority INTEGER NOT NULL DEFAULT 0,
///     slug TEXT NOT NULL,
///     user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     created_at TEXT NOT NULL,
///     updated_at TEXT NOT NULL
/// );
/// ```

use crate::slug::slugify;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Task model
///
/// The slug is derived from the title at creation time and never
/// regenerated, even when the title is updated later.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID, generated by the store
    pub id: i64,

    /// Task title (also the slug source)
    pub title: String,

    /// Task body text
    pub content: String,

    /// Priority, 0 at creation, settable via update
    pub priority: i64,

    /// URL-safe derivative of the title
    pub slug: String,

    /// Owning user's ID
    pub user_id: i64,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Task title
    pub title: String,

    /// Task body text
    pub content: String,
}

/// Input for updating an existing task
///
/// Every listed field is overwritten; the slug keeps its original value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title (slug is not recomputed)
    pub title: String,

    /// New body text
    pub content: String,

    /// New priority
    pub priority: i64,
}

impl Task {
    /// Creates a new task owned by `user_id`
    ///
    /// Callers must verify the user exists first; this function does not
    /// check the foreign key beyond the storage constraint.
    ///
    /// # Errors
    ///
    /// Returns an error if the foreign key is violated or the database
    /// connection fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use taskboard_shared::models::task::{Task, CreateTask};
    /// # use sqlx::SqlitePool;
    /// # async fn example(pool: SqlitePool, user_id: i64) -> Result<(), sqlx::Error> {
    /// let task = Task::create(&pool, user_id, CreateTask {
    ///     title: "Buy milk".to_string(),
    ///     content: "2 liters".to_string(),
    /// }).await?;
    /// assert_eq!(task.slug, "buy-milk");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(
        pool: &SqlitePool,
        user_id: i64,
        data: CreateTask,
    ) -> Result<Self, sqlx::Error> {
        let now = Utc::now();
        let slug = slugify(&data.title);

        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, content, priority, slug, user_id, created_at, updated_at)
            VALUES (?, ?, 0, ?, ?, ?, ?)
            RETURNING id, title, content, priority, slug, user_id, created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(slug)
        .bind(user_id)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, slug, user_id, created_at, updated_at
            FROM tasks
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks, unfiltered and unpaginated
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, slug, user_id, created_at, updated_at
            FROM tasks
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Lists all tasks owned by `user_id`
    ///
    /// Filters on the tasks' own user_id column.
    pub async fn list_by_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, slug, user_id, created_at, updated_at
            FROM tasks
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Updates a task's mutable fields
    ///
    /// Overwrites title, content, and priority, and refreshes updated_at.
    /// The slug keeps the value derived from the original title.
    ///
    /// # Returns
    ///
    /// The updated task, or None if no task matches `id`
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = ?, content = ?, priority = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, title, content, priority, slug, user_id, created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Deletes a task by ID
    ///
    /// # Returns
    ///
    /// `true` if the task existed and was deleted, `false` otherwise
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
