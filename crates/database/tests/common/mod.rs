//! Test database utilities
//!
//! The store does not own its schema, so tests create the tables the
//! webhook service's migrations would.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub const INSTALLATIONS_TABLE: &str = "CREATE TABLE gh_installations (
    installation_id INTEGER PRIMARY KEY,
    account_id INTEGER NOT NULL,
    sender_id INTEGER NOT NULL,
    enabled_at TEXT NULL
)";

pub const TOOLS_TABLE: &str = r#"CREATE TABLE tools (
    name TEXT NOT NULL,
    path TEXT NOT NULL,
    args TEXT NOT NULL,
    "regexp" TEXT NOT NULL
)"#;

/// Creates an empty in-memory database without any tables
///
/// A single connection keeps every query on the same in-memory database.
pub async fn empty_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database")
}

/// Creates an in-memory database with the installation and tool tables
pub async fn test_pool() -> SqlitePool {
    let pool = empty_pool().await;
    for ddl in [INSTALLATIONS_TABLE, TOOLS_TABLE] {
        sqlx::query(ddl)
            .execute(&pool)
            .await
            .expect("Failed to create table");
    }
    pool
}

pub async fn insert_tool(pool: &SqlitePool, name: &str, path: &str, args: &str, pattern: &str) {
    sqlx::query(r#"INSERT INTO tools (name, path, args, "regexp") VALUES (?, ?, ?, ?)"#)
        .bind(name)
        .bind(path)
        .bind(args)
        .bind(pattern)
        .execute(pool)
        .await
        .expect("Failed to insert tool");
}
