//! Storage capability consumed by the webhook service

use crate::models::{Installation, Tool};
use crate::Result;
use async_trait::async_trait;

/// Persistence operations the webhook service depends on.
///
/// Implementations must treat a duplicate installation insert as a no-op
/// and report a missing installation as `Ok(None)` rather than an error.
#[async_trait]
pub trait Db: Send + Sync {
    /// Record a new installation, ignoring it if the id is already known.
    async fn add_installation(
        &self,
        installation_id: i64,
        account_id: i64,
        sender_id: i64,
    ) -> Result<()>;

    /// Remove an installation. Removing an unknown id is not an error.
    async fn remove_installation(&self, installation_id: i64) -> Result<()>;

    /// Look up an installation, returning None if not found.
    async fn get_installation(&self, installation_id: i64) -> Result<Option<Installation>>;

    /// List all configured tools in storage order.
    async fn list_tools(&self) -> Result<Vec<Tool>>;
}
