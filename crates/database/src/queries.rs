//! Database query functions

use crate::models::*;
use crate::sql::SqlDb;
use crate::store::Db;
use crate::{DatabaseError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

#[async_trait]
impl Db for SqlDb {
    async fn add_installation(
        &self,
        installation_id: i64,
        account_id: i64,
        sender_id: i64,
    ) -> Result<()> {
        // Redelivered webhooks hit the conflict clause and leave the row untouched
        let inserted = sqlx::query(
            "INSERT INTO gh_installations (installation_id, account_id, sender_id)
             VALUES (?, ?, ?)
             ON CONFLICT (installation_id) DO NOTHING",
        )
        .bind(installation_id)
        .bind(account_id)
        .bind(sender_id)
        .execute(self.pool())
        .await
        .map_err(DatabaseError::Write)?
        .rows_affected();

        if inserted == 0 {
            debug!(installation_id, "Installation already recorded");
        } else {
            debug!(installation_id, account_id, sender_id, "Recorded installation");
        }
        Ok(())
    }

    async fn remove_installation(&self, installation_id: i64) -> Result<()> {
        let removed = sqlx::query("DELETE FROM gh_installations WHERE installation_id = ?")
            .bind(installation_id)
            .execute(self.pool())
            .await
            .map_err(DatabaseError::Write)?
            .rows_affected();

        debug!(installation_id, removed, "Removed installation");
        Ok(())
    }

    async fn get_installation(&self, installation_id: i64) -> Result<Option<Installation>> {
        let row = sqlx::query_as::<_, Installation>(
            "SELECT installation_id, account_id, sender_id, enabled_at
             FROM gh_installations WHERE installation_id = ?",
        )
        .bind(installation_id)
        .fetch_optional(self.pool())
        .await
        .map_err(DatabaseError::Read)?;

        Ok(row)
    }

    async fn list_tools(&self) -> Result<Vec<Tool>> {
        let rows = sqlx::query_as::<_, Tool>(
            r#"SELECT name, path, args, "regexp" AS pattern FROM tools"#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(DatabaseError::Read)?;

        Ok(rows)
    }
}

impl SqlDb {
    /// Mark an installation as enabled. Returns false if no installation matched.
    pub async fn enable_installation(
        &self,
        installation_id: i64,
        enabled_at: DateTime<Utc>,
    ) -> Result<bool> {
        let updated = sqlx::query(
            "UPDATE gh_installations SET enabled_at = ? WHERE installation_id = ?",
        )
        .bind(enabled_at)
        .bind(installation_id)
        .execute(self.pool())
        .await
        .map_err(DatabaseError::Write)?
        .rows_affected();

        debug!(installation_id, updated, "Enabled installation");
        Ok(updated > 0)
    }
}
