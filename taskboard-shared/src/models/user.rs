/// User model and database operations
///
/// This module provides the User model and CRUD operations for managing users.
/// Each user owns zero or more tasks; deleting a user removes their tasks in
/// the same transaction.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT NOT NULL UNIQUE,
///     firstname TEXT NOT NULL,
///     lastname TEXT NOT NULL,
///     age INTEGER NOT NULL,
///     slug TEXT NOT NULL UNIQUE,
///     created_at TEXT NOT NULL,
///     updated_at TEXT NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::user::{User, CreateUser};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// // Create a new user
/// let new_user = CreateUser {
///     username: "john_doe".to_string(),
///     firstname: "John".to_string(),
///     lastname: "Doe".to_string(),
///     age: 30,
/// };
///
/// let user = User::create(&pool, new_user).await?;
/// println!("Created user: {} (slug: {})", user.id, user.slug);
/// # Ok(())
/// # }
/// ```

use crate::slug::slugify;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User model representing a registered user
///
/// The slug is derived from the username at creation time and never
/// regenerated; username and slug are immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, generated by the store
    pub id: i64,

    /// Unique human-readable username
    pub username: String,

    /// Display first name
    pub firstname: String,

    /// Display last name
    pub lastname: String,

    /// Age in years
    pub age: i64,

    /// URL-safe derivative of the username
    pub slug: String,

    /// When the user was created
    pub created_at: DateTime<Utc>,

    /// When the user was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new user
///
/// All fields are required. The slug is derived from the username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Unique username (also the slug source)
    pub username: String,

    /// Display first name
    pub firstname: String,

    /// Display last name
    pub lastname: String,

    /// Age in years
    pub age: i64,
}

/// Input for updating an existing user
///
/// Username and slug are immutable post-creation, so they are absent here.
/// Every listed field is overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New first name
    pub firstname: String,

    /// New last name
    pub lastname: String,

    /// New age
    pub age: i64,
}

impl User {
    /// Creates a new user in the database
    ///
    /// The slug is derived from the username with [`slugify`]. Username
    /// uniqueness is enforced only by the storage UNIQUE constraint; a
    /// duplicate surfaces as a database error, not an application check.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Username or slug already exists (unique constraint violation)
    /// - Database connection fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use taskboard_shared::models::user::{User, CreateUser};
    /// # use sqlx::SqlitePool;
    /// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
    /// let user = User::create(&pool, CreateUser {
    ///     username: "john_doe".to_string(),
    ///     firstname: "John".to_string(),
    ///     lastname: "Doe".to_string(),
    ///     age: 30,
    /// }).await?;
    /// assert_eq!(user.slug, "john-doe");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let now = Utc::now();
        let slug = slugify(&data.username);

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, firstname, lastname, age, slug, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, username, firstname, lastname, age, slug, created_at, updated_at
            "#,
        )
        .bind(data.username)
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .bind(slug)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists all users, unfiltered and unpaginated
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug, created_at, updated_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Updates a user's mutable fields
    ///
    /// Overwrites firstname, lastname, and age, and refreshes updated_at.
    /// Username and slug are never touched.
    ///
    /// # Returns
    ///
    /// The updated user, or None if no user matches `id`
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET firstname = ?, lastname = ?, age = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, username, firstname, lastname, age, slug, created_at, updated_at
            "#,
        )
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Deletes a user and all tasks owned by them
    ///
    /// Both deletes run in one transaction; either the user and every one
    /// of their tasks disappear together, or nothing changes.
    ///
    /// # Returns
    ///
    /// `true` if the user existed and was deleted, `false` otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails or the transaction
    /// cannot be committed
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM tasks WHERE user_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
