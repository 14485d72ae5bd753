//! Database models for HookCI

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub App installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Installation {
    pub installation_id: i64,
    pub account_id: i64,
    pub sender_id: i64,
    /// Set once the installation has been explicitly enabled
    pub enabled_at: Option<DateTime<Utc>>,
}

impl Installation {
    /// Whether the installation has been enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled_at.is_some()
    }
}

/// An external tool run against incoming changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tool {
    pub name: String,
    pub path: String,
    pub args: String,
    /// Selects the tool's output lines to report
    pub pattern: String,
}
