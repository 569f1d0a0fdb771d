use fp_core::{User, UserRole};
use fp_db::{MIGRATOR, UserRepository};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a user so foreign keys on owner/author columns are satisfied
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> User {
    let user = User::new(
        username,
        &format!("{username}@example.com"),
        "not-a-real-hash".to_string(),
        UserRole::Writer,
    );

    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");

    user
}
