//! SQL connection management

use crate::{DatabaseError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Connection, SqlitePool};
use std::path::Path;
use tracing::{debug, info};

/// SQL-backed store
///
/// Wraps a connection pool whose schema is managed elsewhere. Cloning is cheap
/// and shares the pool.
#[derive(Clone)]
pub struct SqlDb {
    pool: SqlitePool,
}

impl SqlDb {
    /// Wrap an already-configured pool, failing if the database cannot be reached
    pub async fn new(pool: SqlitePool) -> Result<Self> {
        let db = Self { pool };
        db.ping().await?;

        debug!("Database ping succeeded");
        Ok(db)
    }

    /// Open an existing database file
    pub async fn connect(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(false)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(DatabaseError::Connection)?;

        let db = Self::new(pool).await?;

        info!("Database connected: {}", path.display());
        Ok(db)
    }

    /// Check that a connection can be acquired and answers a ping
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(DatabaseError::Connection)?;

        conn.ping().await.map_err(DatabaseError::Connection)
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
