use anyhow::{Context, Result};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;

// ============================================================================
// Database Setup
// ============================================================================
//
// Tables are created idempotently at startup. There is no migration history;
// the schema below is the whole schema.
//
// ============================================================================

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS customers (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        street TEXT,
        number INTEGER,
        zipcode TEXT,
        city TEXT,
        active BOOLEAN NOT NULL,
        reward_points INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS products (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        price REAL NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        id TEXT PRIMARY KEY NOT NULL,
        customer_id TEXT NOT NULL REFERENCES customers(id),
        total REAL NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS order_items (
        id TEXT PRIMARY KEY NOT NULL,
        order_id TEXT NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
        product_id TEXT NOT NULL REFERENCES products(id),
        name TEXT NOT NULL,
        price REAL NOT NULL,
        quantity INTEGER NOT NULL
    )",
];

/// Open a connection pool for `config`.
///
/// Connections are never recycled: an in-memory SQLite database lives only
/// as long as its connection.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(&config.url)
        .await
        .with_context(|| format!("Failed to connect to database at {}", config.url))?;

    tracing::info!(url = %config.url, max_connections = config.max_connections, "Connected to database");
    Ok(pool)
}

/// Create all tables if they do not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(*statement)
            .execute(pool)
            .await
            .context("Failed to create schema")?;
    }

    tracing::debug!(tables = SCHEMA.len(), "Database schema ready");
    Ok(())
}

/// In-memory database with the schema applied, for tests.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = connect(&DatabaseConfig::default()).await.unwrap();
    init_schema(&pool).await.unwrap();
    pool
}
