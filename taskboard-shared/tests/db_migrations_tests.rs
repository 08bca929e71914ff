/// Integration tests for database migrations
///
/// These tests run against an in-memory SQLite database, so they need no
/// external services.

use taskboard_shared::db::migrations::{
    drop_database, ensure_database_exists, get_migration_status, run_migrations,
};
use taskboard_shared::db::pool::{close_pool, create_pool, DatabaseConfig};

/// Pool configuration for an in-memory database (single pinned connection)
fn memory_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        connect_timeout_seconds: 5,
        idle_timeout_seconds: None,
        max_lifetime_seconds: None,
        test_before_acquire: false,
    }
}

#[tokio::test]
async fn test_run_migrations() {
    let pool = create_pool(memory_config()).await.expect("Failed to create pool");

    let result = run_migrations(&pool).await;
    assert!(result.is_ok(), "Migrations failed: {:?}", result.err());

    // Verify migrations were applied
    let status = get_migration_status(&pool)
        .await
        .expect("Failed to get migration status");
    assert!(status.applied_migrations > 0, "No migrations were applied");
    assert!(status.is_up_to_date);

    close_pool(pool).await;
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let pool = create_pool(memory_config()).await.expect("Failed to create pool");

    run_migrations(&pool).await.expect("First run failed");
    let first = get_migration_status(&pool).await.unwrap();

    // Running again must be a no-op
    run_migrations(&pool).await.expect("Second run failed");
    let second = get_migration_status(&pool).await.unwrap();

    assert_eq!(first.applied_migrations, second.applied_migrations);
    assert_eq!(first.latest_version, second.latest_version);

    close_pool(pool).await;
}

#[tokio::test]
async fn test_status_before_migrations() {
    let pool = create_pool(memory_config()).await.expect("Failed to create pool");

    let status = get_migration_status(&pool)
        .await
        .expect("Failed to get migration status");
    assert_eq!(status.applied_migrations, 0);
    assert_eq!(status.latest_version, None);
    assert!(!status.is_up_to_date);

    close_pool(pool).await;
}

#[tokio::test]
async fn test_ensure_and_drop_database() {
    let db_path = std::env::temp_dir().join(format!("taskboard_test_{}.db", std::process::id()));
    let db_url = format!("sqlite://{}", db_path.display());

    // Creating twice must be safe
    ensure_database_exists(&db_url).await.expect("First create failed");
    ensure_database_exists(&db_url).await.expect("Second create failed");
    assert!(db_path.exists());

    drop_database(&db_url).await.expect("Drop failed");
    assert!(!db_path.exists());

    // Dropping a missing database is a no-op
    drop_database(&db_url).await.expect("Second drop failed");
}

#[tokio::test]
async fn test_migrations_create_expected_tables() {
    let pool = create_pool(memory_config()).await.expect("Failed to create pool");
    run_migrations(&pool).await.expect("Migrations failed");

    for table in ["users", "tasks"] {
        let exists: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(exists.0, 1, "Table {table} should exist");
    }

    close_pool(pool).await;
}
