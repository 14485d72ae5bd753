//! In-memory implementation of `Db`.
//!
//! Behaves like `SqlDb` against a fresh schema: duplicate inserts are
//! ignored, removals of unknown ids succeed and lookups miss with `None`.
//! All state is lost when the value is dropped.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::models::{Installation, Tool};
use crate::store::Db;
use crate::Result;

/// In-memory store for tests of code that consumes `Db`
#[derive(Default)]
pub struct MemDb {
    installations: RwLock<HashMap<i64, Installation>>,
    tools: Vec<Tool>,
}

impl MemDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose tool list is fixed to `tools`
    pub fn with_tools(tools: Vec<Tool>) -> Self {
        Self {
            installations: RwLock::new(HashMap::new()),
            tools,
        }
    }

    /// Mark an installation as enabled. Returns false if no installation matched.
    pub async fn enable_installation(
        &self,
        installation_id: i64,
        enabled_at: DateTime<Utc>,
    ) -> bool {
        let mut installations = self.installations.write().await;
        match installations.get_mut(&installation_id) {
            Some(installation) => {
                installation.enabled_at = Some(enabled_at);
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl Db for MemDb {
    async fn add_installation(
        &self,
        installation_id: i64,
        account_id: i64,
        sender_id: i64,
    ) -> Result<()> {
        let mut installations = self.installations.write().await;
        installations.entry(installation_id).or_insert_with(|| Installation {
            installation_id,
            account_id,
            sender_id,
            enabled_at: None,
        });
        Ok(())
    }

    async fn remove_installation(&self, installation_id: i64) -> Result<()> {
        let mut installations = self.installations.write().await;
        installations.remove(&installation_id);
        Ok(())
    }

    async fn get_installation(&self, installation_id: i64) -> Result<Option<Installation>> {
        let installations = self.installations.read().await;
        Ok(installations.get(&installation_id).cloned())
    }

    async fn list_tools(&self) -> Result<Vec<Tool>> {
        Ok(self.tools.clone())
    }
}
